//! Variant and version classification, and the `info` report on textual UUIDs.

use std::{fmt, str};

use crate::format::{self, Format};
use crate::{Error, Uuid};

/// The layout family of a UUID, indicated by the top bits of octet 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    ReservedNcs,

    /// `10x`: the variant specified by RFC 4122.
    Rfc4122,

    /// `110`: reserved for Microsoft backward compatibility.
    ReservedMicrosoft,

    /// `111`: reserved for future definition.
    ReservedFuture,
}

impl Variant {
    /// Classifies the variant octet (octet 8) of a UUID, examining its most significant bits
    /// first.
    pub fn from_octet(octet: u8) -> Result<Self, Error> {
        match octet >> 5 {
            0b000..=0b011 => Ok(Self::ReservedNcs),
            0b100..=0b101 => Ok(Self::Rfc4122),
            0b110 => Ok(Self::ReservedMicrosoft),
            0b111 => Ok(Self::ReservedFuture),
            _ => Err(Error::InvalidVariant(octet)),
        }
    }

    /// Returns the snake_case name of the variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReservedNcs => "reserved_ncs",
            Self::Rfc4122 => "rfc4122",
            Self::ReservedMicrosoft => "reserved_microsoft",
            Self::ReservedFuture => "reserved_future",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Uuid {
    /// Returns the 4-bit version field (bits 48 through 51).
    ///
    /// The value is reported as is, so it may be a number this crate does not generate.
    pub const fn version(&self) -> u8 {
        self.as_bytes()[6] >> 4
    }

    /// Returns the variant classified from the top bits of octet 8.
    pub fn variant(&self) -> Result<Variant, Error> {
        Variant::from_octet(self.as_bytes()[8])
    }
}

/// Report on a textual UUID returned by [`info()`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Info {
    /// The text as supplied by the caller.
    pub uuid: String,

    /// The detected representation.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub format: Format,

    /// The version field.
    pub version: u8,

    /// The variant field.
    pub variant: Variant,
}

/// Parses a textual UUID in any of the three representations and reports its format, version,
/// and variant.
///
/// The input may be any byte sequence; one that is not UTF-8 text fails with
/// [`Error::InvalidArgument`], and text that is not a UUID fails with [`Error::InvalidFormat`].
///
/// # Examples
///
/// ```rust
/// use rfc4122::{info, Format, Variant};
///
/// let x = info("da55ad7a21334017445da3e25682e4e8")?;
/// assert_eq!(x.format, Format::Hex);
/// assert_eq!(x.version, 4);
/// assert_eq!(x.variant, Variant::ReservedNcs);
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn info<T: AsRef<[u8]>>(input: T) -> Result<Info, Error> {
    let text = str::from_utf8(input.as_ref()).map_err(|err| {
        tracing::trace!(%err, "rejected non-text input");
        Error::InvalidArgument(format!("expected UUID text: {err}"))
    })?;
    let (format, value) = format::decode(text).inspect_err(|err| {
        tracing::trace!(%err, "rejected malformed input");
    })?;

    Ok(Info {
        uuid: text.to_owned(),
        format,
        version: value.version(),
        variant: value.variant()?,
    })
}

#[cfg(test)]
mod tests {
    use super::{info, Variant};
    use crate::{Error, Format, Uuid};

    /// Classifies variants of constructed byte patterns
    #[test]
    fn classifies_variants_of_constructed_byte_patterns() {
        let cases = [
            (0b0000_0000, Variant::ReservedNcs),
            (0b0111_1111, Variant::ReservedNcs),
            (0b0100_0000, Variant::ReservedNcs),
            (0b1000_0000, Variant::Rfc4122),
            (0b1011_1111, Variant::Rfc4122),
            (0b1010_0101, Variant::Rfc4122),
            (0b1100_0000, Variant::ReservedMicrosoft),
            (0b1101_1111, Variant::ReservedMicrosoft),
            (0b1110_0000, Variant::ReservedFuture),
            (0b1111_1111, Variant::ReservedFuture),
        ];

        for (octet, expected) in cases {
            let mut bytes = [0x5au8; 16];
            bytes[8] = octet;
            assert_eq!(Uuid::from(bytes).variant(), Ok(expected), "{octet:#010b}");
            assert_eq!(Variant::from_octet(octet), Ok(expected));
        }
    }

    /// Extracts version nibble
    #[test]
    fn extracts_version_nibble() {
        for version in 0..16u8 {
            let mut bytes = [0xa5u8; 16];
            bytes[6] = (version << 4) | 0x0c;
            assert_eq!(Uuid::from(bytes).version(), version);
        }
        assert_eq!(Uuid::NIL.version(), 0);
        assert_eq!(Uuid::MAX.version(), 15);
    }

    /// Reports prepared cases correctly
    #[test]
    fn reports_prepared_cases_correctly() {
        let cases = [
            (
                "da55ad7a21334017445da3e25682e4e8",
                Format::Hex,
                4,
                Variant::ReservedNcs,
            ),
            (
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                Format::Default,
                1,
                Variant::Rfc4122,
            ),
            (
                "URN:UUID:EECF4C2B-F6E5-3AE3-BEF7-1EA09F91D3E7",
                Format::Urn,
                3,
                Variant::Rfc4122,
            ),
            (
                "00000000-0000-0000-c000-000000000046",
                Format::Default,
                0,
                Variant::ReservedMicrosoft,
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                Format::Hex,
                15,
                Variant::ReservedFuture,
            ),
        ];

        for (text, format, version, variant) in cases {
            let e = info(text).unwrap();
            assert_eq!(e.uuid, text);
            assert_eq!(e.format, format);
            assert_eq!(e.version, version);
            assert_eq!(e.variant, variant);
        }
    }

    /// Accepts owned strings and byte slices
    #[test]
    fn accepts_owned_strings_and_byte_slices() {
        let text = "ae119419-7776-563d-b6e8-8a177abccc7a";
        assert_eq!(info(String::from(text)), info(text));
        assert_eq!(info(text.as_bytes()), info(text));
        assert_eq!(info(text.as_bytes().to_vec()), info(text));
    }

    /// Rejects malformed and non-text input
    #[test]
    fn rejects_malformed_and_non_text_input() {
        assert!(matches!(info("not-a-uuid"), Err(Error::InvalidFormat(_))));
        assert!(matches!(info(""), Err(Error::InvalidFormat(_))));
        assert!(matches!(
            info(123u128.to_be_bytes()),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            info([0xffu8; 32]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            info(b"6ba7b810-9dad-11d1-80b4-00c04fd430\xc3\x28"),
            Err(Error::InvalidArgument(_))
        ));
    }

    /// Displays variant names
    #[test]
    fn displays_variant_names() {
        assert_eq!(Variant::ReservedNcs.to_string(), "reserved_ncs");
        assert_eq!(Variant::Rfc4122.to_string(), "rfc4122");
        assert_eq!(Variant::ReservedMicrosoft.to_string(), "reserved_microsoft");
        assert_eq!(Variant::ReservedFuture.to_string(), "reserved_future");
    }

    #[cfg(feature = "serde")]
    /// Serializes info record with type field
    #[test]
    fn serializes_info_record_with_type_field() {
        use serde_test::{assert_tokens, Token};

        let e = info("da55ad7a21334017445da3e25682e4e8").unwrap();
        assert_tokens(
            &e,
            &[
                Token::Struct {
                    name: "Info",
                    len: 4,
                },
                Token::Str("uuid"),
                Token::Str("da55ad7a21334017445da3e25682e4e8"),
                Token::Str("type"),
                Token::UnitVariant {
                    name: "Format",
                    variant: "hex",
                },
                Token::Str("version"),
                Token::U8(4),
                Token::Str("variant"),
                Token::UnitVariant {
                    name: "Variant",
                    variant: "reserved_ncs",
                },
                Token::StructEnd,
            ],
        );
    }
}
