//! Random number source interface shared by the UUIDv1 and UUIDv4 generators.

use crate::Error;

pub mod with_rand08;

/// A trait that defines the random number source interface for [`V1Generator`] and
/// [`V4Generator`].
///
/// Implementations are expected to be cryptographically strong. A failure is surfaced to the
/// caller of the generator as is; generators never retry.
///
/// [`V1Generator`]: crate::V1Generator
/// [`V4Generator`]: crate::V4Generator
pub trait RandSource {
    /// Fills `dest` with random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// The default random number source, which reads from the operating system.
pub type OsRandom = with_rand08::Adapter<rand::rngs::OsRng>;
