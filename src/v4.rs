//! UUIDv4 generator.

use crate::generator::RandSource;
use crate::{Error, Uuid};

/// Represents a UUIDv4 generator that fills 122 bits with the output of its random number
/// source and stamps the version and variant bits onto the rest.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use rfc4122::V4Generator;
///
/// // a seeded source makes the sequence reproducible
/// let mut g = V4Generator::with_rand08(StdRng::seed_from_u64(7));
/// let mut h = V4Generator::with_rand08(StdRng::seed_from_u64(7));
/// assert_eq!(g.generate()?, h.generate()?);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number source used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(Uuid::stamp(bytes, 4))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`, or `None` if the random number source fails.
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
