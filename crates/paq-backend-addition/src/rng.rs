//! Deterministic draw source using PCG32 with BLAKE3 seed derivation.
//!
//! Every labelled draw gets its own PCG32 stream seeded from
//! `derive_draw_seed(seed, method, label)`. A draw therefore depends only on
//! the base seed, the method and the label: repeating a label repeats the
//! result, and distinct labels are independent of each other.

use paq_spec::{derive_draw_seed, DrawSource};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::DrawError;

const INTEGER_METHOD: &str = "integer";
const SHUFFLE_METHOD: &str = "shuffle";

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Seeded, label-addressed draw source.
///
/// # Example
/// ```
/// use paq_backend_addition::SeededDraws;
/// use paq_spec::DrawSource;
///
/// let mut a = SeededDraws::new(7);
/// let mut b = SeededDraws::new(7);
/// assert_eq!(
///     a.integer("left addend", 100).unwrap(),
///     b.integer("left addend", 100).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededDraws {
    seed: u32,
}

impl SeededDraws {
    /// Creates a draw source for the given base seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn stream(&self, method: &str, label: &str) -> Result<Pcg32, DrawError> {
        if label.is_empty() {
            return Err(DrawError::EmptyLabel);
        }
        Ok(create_rng(derive_draw_seed(self.seed, method, label)))
    }
}

impl DrawSource for SeededDraws {
    type Error = DrawError;

    fn integer(&mut self, label: &str, bound: u32) -> Result<u32, DrawError> {
        let mut rng = self.stream(INTEGER_METHOD, label)?;
        if bound == 0 {
            return Err(DrawError::EmptyRange {
                label: label.to_string(),
            });
        }
        Ok(rng.gen_range(0..bound))
    }

    fn shuffle<T>(&mut self, label: &str, mut items: Vec<T>) -> Result<Vec<T>, DrawError> {
        let mut rng = self.stream(SHUFFLE_METHOD, label)?;
        items.shuffle(&mut rng);
        Ok(items)
    }
}
