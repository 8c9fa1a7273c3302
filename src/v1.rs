//! UUIDv1 generator and the clock and node sources it consumes.
//!
//! Every call recomputes all three v1 inputs: the timestamp is read from the clock, the clock
//! sequence is drawn afresh, and the node ID is resolved again. No state is carried from one call
//! to the next, so two calls within the same 100-nanosecond tick may yield identical UUIDs if
//! their clock sequences also happen to coincide.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::{process, thread, time};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::generator::RandSource;
use crate::{Error, Uuid};

/// The number of 100-nanosecond intervals from 1582-10-15 to 1970-01-01.
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

const MAX_TIMESTAMP: u64 = (1 << 60) - 1;
const CLOCK_SEQ_RANGE: u16 = 1 << 14;

/// A trait that defines the clock interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current time as the number of 100-nanosecond intervals since 1582-10-15
    /// 00:00:00 UTC.
    fn gregorian_ticks(&mut self) -> Result<u64, Error>;
}

/// A trait that defines the node ID interface for [`V1Generator`].
pub trait NodeSource {
    /// Returns the 48-bit hardware address of the host, or `None` if none is discoverable.
    fn hardware_address(&mut self) -> Option<[u8; 6]>;
}

/// The system clock.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn gregorian_ticks(&mut self) -> Result<u64, Error> {
        let since_unix_epoch = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_err(|err| Error::Clock(err.to_string()))?;
        Ok(GREGORIAN_OFFSET
            + since_unix_epoch.as_secs() * 10_000_000
            + u64::from(since_unix_epoch.subsec_nanos() / 100))
    }
}

/// A node source that looks up the hardware address of the first non-loopback network
/// interface.
#[cfg(feature = "mac_address")]
#[cfg_attr(docsrs, doc(cfg(feature = "mac_address")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MacAddressNode;

#[cfg(feature = "mac_address")]
impl MacAddressNode {
    /// Creates a node source instance.
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(feature = "mac_address")]
impl NodeSource for MacAddressNode {
    fn hardware_address(&mut self) -> Option<[u8; 6]> {
        match mac_address::get_mac_address() {
            Ok(Some(addr)) if addr.bytes() != [0; 6] => Some(addr.bytes()),
            Ok(_) => {
                tracing::debug!("no network interface reports a hardware address");
                None
            }
            Err(err) => {
                tracing::debug!(%err, "could not enumerate network interfaces");
                None
            }
        }
    }
}

/// A node source that never reports a hardware address, so that every UUID carries a random node
/// ID.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomNode;

impl RandomNode {
    /// Creates a node source instance.
    pub const fn new() -> Self {
        Self
    }
}

impl NodeSource for RandomNode {
    fn hardware_address(&mut self) -> Option<[u8; 6]> {
        None
    }
}

/// A fixed node ID.
impl NodeSource for [u8; 6] {
    fn hardware_address(&mut self) -> Option<[u8; 6]> {
        Some(*self)
    }
}

/// The node source used by the default generator.
#[cfg(feature = "mac_address")]
pub type DefaultNode = MacAddressNode;

/// The node source used by the default generator.
#[cfg(not(feature = "mac_address"))]
pub type DefaultNode = RandomNode;

/// Represents a UUIDv1 generator.
///
/// The generator holds only its sources. Each UUID packs a fresh reading of the clock, a clock
/// sequence drawn for that call, and the node ID resolved for that call:
///
/// - The clock sequence is drawn from a ChaCha12 generator seeded with 32 bytes from the random
///   number source, the first twelve of which are mixed with a hash of the calling process and
///   thread IDs. This decorrelates concurrent callers on a best-effort basis only; it is no
///   cryptographic guarantee.
/// - The node ID is the hardware address reported by the node source or, if there is none, six
///   random bytes with the multicast bit set as RFC 4122 section 4.5 prescribes.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{v1::RandomNode, v1::StdSystemTime, V1Generator};
///
/// let mut g = V1Generator::with_sources(rfc4122::OsRandom::default(), StdSystemTime, RandomNode);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), 1);
/// assert_eq!(uuid.node_v1().map(|node| node[0] & 1), Some(1));
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V1Generator<R, T, N> {
    /// The random number source used by the generator.
    rng: R,

    /// The clock used by the generator.
    clock: T,

    /// The node ID source used by the generator.
    node: N,
}

impl<R: RandSource, T: TimeSource, N: NodeSource> V1Generator<R, T, N> {
    /// Creates a generator instance from its three sources.
    pub const fn with_sources(rng: R, clock: T, node: N) -> Self {
        Self { rng, clock, node }
    }

    /// Generates a new UUIDv1 object.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let timestamp = self.clock.gregorian_ticks()? & MAX_TIMESTAMP;
        let clock_seq = self.clock_seq()?;
        let node = self.node_id()?;
        Ok(Uuid::from_fields_v1(timestamp, clock_seq, node))
    }

    fn clock_seq(&mut self) -> Result<u16, Error> {
        let mut seed = [0u8; 32];
        self.rng.try_fill_bytes(&mut seed)?;
        let identity = caller_identity().to_be_bytes();
        for chunk in seed[..12].chunks_exact_mut(4) {
            for (e, k) in chunk.iter_mut().zip(identity) {
                *e ^= k;
            }
        }

        let mut prng = ChaCha12Rng::from_seed(seed);
        Ok(prng.gen_range(0..CLOCK_SEQ_RANGE))
    }

    fn node_id(&mut self) -> Result<[u8; 6], Error> {
        if let Some(node) = self.node.hardware_address() {
            return Ok(node);
        }

        tracing::debug!("using a random node ID");
        let mut node = [0u8; 6];
        self.rng.try_fill_bytes(&mut node)?;
        node[0] |= 0x01;
        Ok(node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`, or `None` if a source fails.
impl<R: RandSource, T: TimeSource, N: NodeSource> Iterator for V1Generator<R, T, N> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Returns a 32-bit hash of the calling process and thread IDs.
fn caller_identity() -> u32 {
    let mut hasher = DefaultHasher::new();
    process::id().hash(&mut hasher);
    thread::current().id().hash(&mut hasher);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}

impl Uuid {
    /// Returns the 60-bit timestamp of a UUIDv1, or `None` if the version field is not 1.
    pub const fn timestamp_v1(&self) -> Option<u64> {
        if self.version() != 1 {
            return None;
        }
        let b = self.as_bytes();
        Some(
            ((b[6] as u64 & 0x0f) << 56)
                | ((b[7] as u64) << 48)
                | ((b[4] as u64) << 40)
                | ((b[5] as u64) << 32)
                | ((b[0] as u64) << 24)
                | ((b[1] as u64) << 16)
                | ((b[2] as u64) << 8)
                | (b[3] as u64),
        )
    }

    /// Returns the 14-bit clock sequence of a UUIDv1, or `None` if the version field is not 1.
    pub const fn clock_seq_v1(&self) -> Option<u16> {
        if self.version() != 1 {
            return None;
        }
        let b = self.as_bytes();
        Some(((b[8] as u16 & 0x3f) << 8) | b[9] as u16)
    }

    /// Returns the 48-bit node ID of a UUIDv1, or `None` if the version field is not 1.
    pub const fn node_v1(&self) -> Option<[u8; 6]> {
        if self.version() != 1 {
            return None;
        }
        let b = self.as_bytes();
        Some([b[10], b[11], b[12], b[13], b[14], b[15]])
    }
}
