//! Default generators and entry point functions

use crate::generator::OsRandom;
use crate::name::{Namespace, V3Generator, V5Generator};
use crate::v1::{DefaultNode, StdSystemTime};
use crate::{Error, Format, Uuid, V1Generator, V4Generator};

/// Generates a UUIDv1 object from the system clock, a fresh clock sequence, and the host's
/// hardware address (or a random node ID if none is discoverable).
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{uuid}"); // e.g., "f4a36c20-0b5e-11d1-aa5c-001b638445e6"
/// assert_eq!(uuid.version(), 1);
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    V1Generator::with_sources(OsRandom::default(), StdSystemTime, DefaultNode::new()).generate()
}

/// Generates a UUIDv4 object from the operating system's random number source.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    V4Generator::<OsRandom>::default().generate()
}

/// Generates a UUIDv1 string in the requested format.
pub fn generate_v1(format: Format) -> Result<String, Error> {
    uuid1().map(|value| value.encode(format))
}

/// Generates a UUIDv3 string for `name` within `namespace`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{generate_v3, Format, Namespace};
///
/// let uuid = generate_v3(Namespace::Dns, "my.domain.com", Format::Default);
/// assert_eq!(uuid, "eecf4c2b-f6e5-3ae3-bef7-1ea09f91d3e7");
///
/// // namespaces can also be given as tags or UUID strings
/// let uuid = generate_v3("dns".parse()?, "my.domain.com", Format::Hex);
/// assert_eq!(uuid, "eecf4c2bf6e53ae3bef71ea09f91d3e7");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn generate_v3(namespace: Namespace, name: impl AsRef<[u8]>, format: Format) -> String {
    V3Generator::default()
        .generate(&namespace, name)
        .encode(format)
}

/// Generates a UUIDv4 string in the requested format.
pub fn generate_v4(format: Format) -> Result<String, Error> {
    uuid4().map(|value| value.encode(format))
}

/// Generates a UUIDv5 string for `name` within `namespace`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{generate_v5, Format, Namespace};
///
/// let uuid = generate_v5(Namespace::Dns, "my.domain.com", Format::Urn);
/// assert_eq!(uuid, "urn:uuid:ae119419-7776-563d-b6e8-8a177abccc7a");
/// ```
pub fn generate_v5(namespace: Namespace, name: impl AsRef<[u8]>, format: Format) -> String {
    V5Generator::default()
        .generate(&namespace, name)
        .encode(format)
}

#[cfg(test)]
mod tests {
    use super::{generate_v1, generate_v3, generate_v4, generate_v5, uuid1, uuid4};
    use crate::{info, Format, Namespace, Variant};

    const FORMATS: [Format; 3] = [Format::Default, Format::Hex, Format::Urn];

    /// Round-trips every version through info
    #[test]
    fn round_trips_every_version_through_info() {
        for format in FORMATS {
            let cases = [
                (generate_v1(format).unwrap(), 1),
                (generate_v3(Namespace::Url, "https://example.com/", format), 3),
                (generate_v4(format).unwrap(), 4),
                (generate_v5(Namespace::Oid, "1.3.6.1", format), 5),
            ];
            for (text, version) in cases {
                let e = info(&text).unwrap();
                assert_eq!(e.uuid, text);
                assert_eq!(e.format, format);
                assert_eq!(e.version, version);
                assert_eq!(e.variant, Variant::Rfc4122);
            }
        }
    }

    /// Generates published name-based vectors
    #[test]
    fn generates_published_name_based_vectors() {
        assert_eq!(
            generate_v3(Namespace::Dns, "my.domain.com", Format::Default),
            "eecf4c2b-f6e5-3ae3-bef7-1ea09f91d3e7"
        );
        assert_eq!(
            generate_v5(Namespace::Dns, "my.domain.com", Format::Default),
            "ae119419-7776-563d-b6e8-8a177abccc7a"
        );
        assert_eq!(
            generate_v5(
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap(),
                "my.domain.com",
                Format::default()
            ),
            "ae119419-7776-563d-b6e8-8a177abccc7a"
        );
    }

    /// Renders the same value in every format
    #[test]
    fn renders_the_same_value_in_every_format() {
        let [default, hex, urn] =
            FORMATS.map(|format| generate_v5(Namespace::X500, "cn=John", format));
        assert_eq!(default.len(), 36);
        assert_eq!(default.replace('-', ""), hex);
        assert_eq!(urn, format!("urn:uuid:{default}"));
    }

    /// Generates 1k distinct random identifiers
    #[test]
    fn generates_1k_distinct_random_identifiers() {
        use std::collections::HashSet;
        let s: HashSet<String> = (0..1_000)
            .map(|_| generate_v4(Format::Hex).unwrap())
            .collect();
        assert_eq!(s.len(), 1_000);
    }

    /// Returns values with correct versions
    #[test]
    fn returns_values_with_correct_versions() {
        assert_eq!(uuid1().unwrap().version(), 1);
        assert_eq!(uuid4().unwrap().version(), 4);
    }

    /// Generates from many threads independently
    #[test]
    fn generates_from_many_threads_independently() {
        use std::{collections::HashSet, thread};

        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (0..1_000)
                        .map(|_| uuid4().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut s = HashSet::new();
        for handle in handles {
            s.extend(handle.join().unwrap());
        }
        assert_eq!(s.len(), 4 * 1_000);
    }
}
