//! Labelled random-decision source.
//!
//! Generators never touch an RNG directly. Every random decision goes through
//! a [`DrawSource`] together with a label naming the decision, which lets a
//! seeded source derive an independent stream per label and lets tests pin
//! individual decisions.
//!
//! Labels are part of a generator's public contract: renaming one changes the
//! output for every seed.

/// A reproducible source of labelled random decisions.
///
/// Implementations must return the same value for the same label, bound and
/// underlying seed. Errors are returned to the generator's caller unchanged.
pub trait DrawSource {
    /// Error produced by a failed draw.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws an integer in `[0, bound)`.
    fn integer(&mut self, label: &str, bound: u32) -> Result<u32, Self::Error>;

    /// Returns a permutation of `items`.
    fn shuffle<T>(&mut self, label: &str, items: Vec<T>) -> Result<Vec<T>, Self::Error>;
}
