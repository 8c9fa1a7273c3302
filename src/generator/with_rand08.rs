//! Integration with `rand` (v0.8) crate.

use super::RandSource;
use crate::v1::{DefaultNode, StdSystemTime};
use crate::{Error, V1Generator, V4Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(|err| {
            tracing::debug!(%err, "random source failed");
            Error::RandomSource(err.to_string())
        })
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl<T: RngCore> V1Generator<Adapter<T>, StdSystemTime, DefaultNode> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate, the system clock, and the default node source.
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_sources(Adapter(rng), StdSystemTime, DefaultNode::new())
    }
}
