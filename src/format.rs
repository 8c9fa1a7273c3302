//! Textual representations and the codec between them and [`Uuid`] values.

use std::{fmt, str};

use crate::{Error, Uuid};

/// Prefix of the URN representation.
pub const URN_PREFIX: &str = "urn:uuid:";

/// Textual representation of a UUID.
///
/// All three are presentation transforms of the same 128-bit value; converting between them
/// neither loses nor adds information.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Format {
    /// 8-4-4-4-12 lowercase hex groups joined by hyphens.
    #[default]
    Default,

    /// 32 contiguous lowercase hex digits.
    Hex,

    /// `urn:uuid:` followed by the 8-4-4-4-12 form.
    Urn,
}

impl Format {
    /// Returns the tag name of the format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hex => "hex",
            Self::Urn => "urn",
        }
    }

    const fn is_hyphenated(&self) -> bool {
        !matches!(self, Self::Hex)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Format {
    type Err = Error;

    /// Parses a format tag (`default`, `hex`, or `urn`), ignoring ASCII case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        [Self::Default, Self::Hex, Self::Urn]
            .into_iter()
            .find(|e| src.eq_ignore_ascii_case(e.as_str()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown format tag '{src}'")))
    }
}

/// Renders `value` in the requested textual representation.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{format, Format, Uuid};
///
/// let x = Uuid::from(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8u128);
/// assert_eq!(format::encode(&x, Format::Default), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// assert_eq!(format::encode(&x, Format::Hex), "6ba7b8109dad11d180b400c04fd430c8");
/// assert_eq!(format::encode(&x, Format::Urn), "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// ```
pub fn encode(value: &Uuid, format: Format) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut buffer = String::with_capacity(URN_PREFIX.len() + 36);
    if format == Format::Urn {
        buffer.push_str(URN_PREFIX);
    }
    for (i, e) in value.as_bytes().iter().enumerate() {
        buffer.push(DIGITS[(e >> 4) as usize] as char);
        buffer.push(DIGITS[(e & 15) as usize] as char);
        if format.is_hyphenated() && (i == 3 || i == 5 || i == 7 || i == 9) {
            buffer.push('-');
        }
    }
    buffer
}

/// Parses any of the three textual representations, ignoring ASCII case, and returns the
/// detected format along with the value.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{format, Format};
///
/// let (f, x) = format::decode("URN:UUID:6BA7B811-9DAD-11D1-80B4-00C04FD430C8")?;
/// assert_eq!(f, Format::Urn);
/// assert_eq!(x.to_string(), "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn decode(src: &str) -> Result<(Format, Uuid), Error> {
    let (format, body) = match src.len() {
        32 => (Format::Hex, src),
        36 => (Format::Default, src),
        45 if src
            .get(..URN_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URN_PREFIX)) =>
        {
            (Format::Urn, &src[URN_PREFIX.len()..])
        }
        _ => return Err(invalid_format(src)),
    };

    let err = || invalid_format(src);
    let mut dst = [0u8; 16];
    let mut iter = body.bytes();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = iter.next().and_then(hex_value).ok_or_else(err)?;
        let lo = iter.next().and_then(hex_value).ok_or_else(err)?;
        *e = (hi << 4) | lo;
        if format.is_hyphenated()
            && (i == 3 || i == 5 || i == 7 || i == 9)
            && iter.next() != Some(b'-')
        {
            return Err(err());
        }
    }
    if iter.next().is_none() {
        Ok((format, Uuid::from(dst)))
    } else {
        Err(err())
    }
}

fn hex_value(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

fn invalid_format(src: &str) -> Error {
    Error::InvalidFormat(format!("{src:?}"))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, Format};
    use crate::{Error, Uuid};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(u128, [&'static str; 3])] {
        &[
            (
                0,
                [
                    "00000000-0000-0000-0000-000000000000",
                    "00000000000000000000000000000000",
                    "urn:uuid:00000000-0000-0000-0000-000000000000",
                ],
            ),
            (
                u128::MAX,
                [
                    "ffffffff-ffff-ffff-ffff-ffffffffffff",
                    "ffffffffffffffffffffffffffffffff",
                    "urn:uuid:ffffffff-ffff-ffff-ffff-ffffffffffff",
                ],
            ),
            (
                0x6ba7b814_9dad_11d1_80b4_00c04fd430c8,
                [
                    "6ba7b814-9dad-11d1-80b4-00c04fd430c8",
                    "6ba7b8149dad11d180b400c04fd430c8",
                    "urn:uuid:6ba7b814-9dad-11d1-80b4-00c04fd430c8",
                ],
            ),
            (
                0x0000000f_00f0_0f00_f000_00000000000f,
                [
                    "0000000f-00f0-0f00-f000-00000000000f",
                    "0000000f00f00f00f00000000000000f",
                    "urn:uuid:0000000f-00f0-0f00-f000-00000000000f",
                ],
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        let formats = [Format::Default, Format::Hex, Format::Urn];
        for (value, texts) in prepare_cases() {
            let e = Uuid::from(*value);
            for (format, text) in formats.into_iter().zip(texts) {
                assert_eq!(encode(&e, format), *text);
                assert_eq!(decode(text), Ok((format, e)));
                assert_eq!(decode(&text.to_uppercase()), Ok((format, e)));
            }
        }
    }

    /// Renders equivalent digits in every format
    #[test]
    fn renders_equivalent_digits_in_every_format() {
        for (value, _) in prepare_cases() {
            let e = Uuid::from(*value);
            let default = encode(&e, Format::Default).replace('-', "");
            let hex = encode(&e, Format::Hex);
            let urn = encode(&e, Format::Urn);
            let urn = urn.strip_prefix("urn:uuid:").unwrap().replace('-', "");
            assert_eq!(default.len(), 32);
            assert_eq!(default, hex);
            assert_eq!(default, urn);
        }
    }

    /// Accepts mixed-case URN prefix
    #[test]
    fn accepts_mixed_case_urn_prefix() {
        let (format, e) = decode("Urn:UuId:6BA7B810-9dad-11D1-80b4-00c04fd430c8").unwrap();
        assert_eq!(format, Format::Urn);
        assert_eq!(u128::from(e), 0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "not-a-uuid",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            " 0180a8f0-5b84-7438-ab50-f063bd5331af ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "-0180a8f0-5b84-7438-ab50-f06508df4c2d",
            "+180a8f0-5b84-7438-ab50-f066aa10a367",
            "-180a8f0-5b84-7438-ab50-f067cdce1d69",
            "0180a8f0-5b847438-ab50-f06991838802",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
            "0180a8f05b847438ab50f068decfbfd",
            "0180a8f05b847438ab50f068decfbfd70",
            "+180a8f05b847438ab50f068decfbfd7",
            "0180a8f05b847438ab50f068decfbfdz",
            "0180a8f0-5b84-7438-ab50f068decfbfd7",
            "urn:uuid:0180a8f05b847438ab50f068decfbfd7",
            "urn:uid:0180a8f0-5b84-7438-ab50-f06d3ea24429",
            "uuid:urn:0180a8f0-5b84-7438-ab50-f06d3ea24429",
            "urn:uuid: 180a8f0-5b84-7438-ab50-f06d3ea24429",
            "0180a8f0-5b84-7438-ab50-f06d3ea2442é",
            "0180a8f05b847438ab50f068decfbfé",
        ];

        for e in cases {
            assert!(
                matches!(decode(e), Err(Error::InvalidFormat(_))),
                "accepted {e:?}"
            );
        }
    }

    /// Parses format tags ignoring case
    #[test]
    fn parses_format_tags_ignoring_case() {
        assert_eq!("default".parse(), Ok(Format::Default));
        assert_eq!("HEX".parse(), Ok(Format::Hex));
        assert_eq!("Urn".parse(), Ok(Format::Urn));
        assert_eq!(Format::default(), Format::Default);
        for e in [Format::Default, Format::Hex, Format::Urn] {
            assert_eq!(e.to_string().parse(), Ok(e));
        }
        assert!(matches!(
            "compact".parse::<Format>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
