//! The `helper` module contains helper constructs for general workflow.

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Standard};

/// A `RandomSource` supplies the uniformly distributed random numbers driving
/// all stochastic decisions of a mutation round. Supplying a source with a
/// known state makes a round fully reproducible, while the sequence of values
/// itself remains opaque to the consuming code.
pub trait RandomSource {
    /// Draws a uniformly distributed random number in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

/// A `PseudoRandomSource` is a seedable [`RandomSource`] for productive use.
#[derive(Debug, Clone)]
pub struct PseudoRandomSource {
    rng: StdRng,
}

impl PseudoRandomSource {
    /// Creates a new `PseudoRandomSource` initialised with the specified seed.
    /// Two sources created from the same seed produce identical draw
    /// sequences.
    ///
    /// # Parameters
    ///
    /// * `seed` - the seed to initialise the underlying generator with
    pub fn from_seed(seed: u64) -> Self {
        PseudoRandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a new `PseudoRandomSource` seeded from the thread local
    /// generator.
    pub fn from_entropy() -> Self {
        PseudoRandomSource::from_seed(thread_rng().gen())
    }
}

impl RandomSource for PseudoRandomSource {
    fn draw(&mut self) -> f64 {
        Standard.sample(&mut self.rng)
    }
}

/// Selects a uniformly distributed index into a collection of the specified
/// length, consuming a single draw from the supplied random source.
/// Returns `None` if the collection is empty.
///
/// # Parameters
///
/// * `length` - the length of the collection to select from
/// * `random_source` - the source of randomness for the selection
pub fn random_index<R: RandomSource + ?Sized>(
    length: usize,
    random_source: &mut R,
) -> Option<usize> {
    if length == 0 {
        None
    } else {
        let index = (random_source.draw() * (length as f64)).floor() as usize;
        // Draws are strictly below 1, but the floating point product may
        // still round up to the length itself.
        Some(index.min(length - 1))
    }
}

pub mod testing;
