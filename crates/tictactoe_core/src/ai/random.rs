//! Random source for the fallback move of the reflexive and heuristic tiers.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Picks uniformly among `len` choices.
///
/// Implemented for every [`rand::Rng`], so a seeded [`StdRng`] gives
/// reproducible games and tests can script exact picks.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Builds the standard generator, seeded when a seed is given and from OS
/// entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
