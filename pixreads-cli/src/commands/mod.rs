//! Command implementations for the pixreads CLI

pub mod image;
pub mod random;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the run RNG: seeded for reproducible output, entropy otherwise.
pub(crate) fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("using fixed RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
