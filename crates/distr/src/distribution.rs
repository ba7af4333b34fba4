//! The input-distribution contract consumed by the chain and process crates.

use rand::Rng;

/// A finite-dimensional probability law that can produce i.i.d. draws and
/// answer per-component moment queries.
///
/// This is the seam between the composition engine and the underlying
/// distribution machinery: the chain builder only ever asks for the
/// dimension, fresh draws, and moments. The generic method shape mirrors
/// [`rand_distr::Distribution::sample`], so any random source from the
/// `rand` ecosystem can drive a draw.
pub trait InputDistribution {
    /// Returns the dimension of one draw.
    fn dimension(&self) -> usize;

    /// Fills `out` with one independent draw.
    ///
    /// `out` must have exactly [`dimension()`](Self::dimension) elements;
    /// callers size the buffer, implementations may `debug_assert` it.
    fn draw_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]);

    /// Returns one independent draw as a freshly allocated vector.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut out = vec![0.0; self.dimension()];
        self.draw_into(rng, &mut out);
        out
    }

    /// Returns the per-component expectation.
    fn mean(&self) -> Vec<f64>;

    /// Returns the per-component variance.
    fn variance(&self) -> Vec<f64>;
}
