//! An implementation of RFC 4122 UUID versions 1, 3, 4, and 5
//!
//! ```rust
//! use rfc4122::{generate_v4, generate_v5, info, Format, Namespace};
//!
//! let uuid = generate_v4(Format::Default)?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = generate_v5(Namespace::Dns, "my.domain.com", Format::Urn);
//! assert_eq!(uuid, "urn:uuid:ae119419-7776-563d-b6e8-8a177abccc7a");
//!
//! let report = info("da55ad7a21334017445da3e25682e4e8")?;
//! assert_eq!(report.format, Format::Hex);
//! assert_eq!(report.version, 4);
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! UUIDv1 identifiers carry the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            time_low                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            time_mid           |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|   seq_hi  |    seq_low    |              node             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC and is
//!   split into `time_low` (lowest 32 bits), `time_mid` (next 16 bits), and `time_hi` (highest 12
//!   bits).
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit clock sequence is split into `seq_hi` (6 bits) and `seq_low` (8 bits) and is drawn
//!   afresh for every identifier.
//! - The 48-bit `node` field holds the hardware address of the host, or six random bytes with the
//!   multicast bit set if no hardware address is discoverable.
//!
//! The generator keeps no state between calls, so it neither guarantees monotonic order nor
//! rules out duplicates within the same 100-nanosecond tick; the 14-bit random clock sequence
//! makes the latter unlikely.
//!
//! The other versions share the `ver` and `var` fields. UUIDv3 and UUIDv5 fill the remaining 122
//! bits from the MD5 and SHA-1 digests of a namespace and a name, and UUIDv4 fills them with a
//! cryptographically strong random number.
//!
//! # Textual representations
//!
//! | [`Format`]  | Example                                         |
//! | ----------- | ----------------------------------------------- |
//! | `Default`   | `6ba7b810-9dad-11d1-80b4-00c04fd430c8`          |
//! | `Hex`       | `6ba7b8109dad11d180b400c04fd430c8`              |
//! | `Urn`       | `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8` |
//!
//! Parsing accepts all three regardless of letter case.
//!
//! # Crate features
//!
//! - `mac_address` (default): looks up the host's hardware address for UUIDv1 node IDs. Without
//!   this feature, UUIDv1 always carries a random node ID.
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uuid`], [`Format`], [`Variant`], and
//!   [`Info`].
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::Uuid;

pub mod format;
pub use format::Format;

mod inspect;
pub use inspect::{info, Info, Variant};

pub mod generator;
pub use generator::{OsRandom, RandSource};

pub mod name;
pub use name::{
    NameGenerator, NameHash, Namespace, NamespaceEncoding, V3Generator, V5Generator,
};

pub mod v1;
pub use v1::V1Generator;

mod v4;
pub use v4::V4Generator;

mod entry;
pub use entry::{generate_v1, generate_v3, generate_v4, generate_v5, uuid1, uuid4};
