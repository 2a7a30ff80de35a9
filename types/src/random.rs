//! Randomness seam for the score engine.

/// A source of uniform random draws.
///
/// The production implementation wraps the `rand` thread RNG; tests swap in
/// a deterministic nullable so score values are repeatable.
pub trait RandomSource {
    /// Draw uniformly from the half-open range `[lo, hi)`.
    ///
    /// Implementations may assume `lo < hi`; when the range is empty they
    /// must return `lo`.
    fn draw(&self, lo: u16, hi: u16) -> u16;
}
