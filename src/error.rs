//! Error type shared by the codec, the inspector, and the generators.

/// Errors returned by parsing, inspection, and generation.
///
/// Every error terminates the single call that produced it; nothing is retried internally.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// The input has the wrong shape or type, e.g. non-text bytes, an unknown namespace tag, or
    /// an unknown format tag.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The text is not one of the recognized UUID representations.
    #[error("invalid UUID string: {0}")]
    InvalidFormat(String),

    /// The variant octet carries a bit pattern outside the RFC 4122 classification.
    #[error("invalid variant octet: {0:#04x}")]
    InvalidVariant(u8),

    /// The random number source could not produce bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// The system clock could not produce a timestamp.
    #[error("clock failure: {0}")]
    Clock(String),
}
