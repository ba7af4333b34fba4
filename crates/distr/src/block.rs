//! Independent concatenation of distribution blocks.

use rand::Rng;

use crate::distribution::InputDistribution;

/// The independent concatenation of distribution blocks.
///
/// A draw of dimension `sum(block dimensions)` is assembled by drawing each
/// block independently and writing it into the corresponding segment, in
/// block order. This is how a chain aggregates N copies of its per-step law
/// into one trajectory-sized input distribution.
///
/// The empty concatenation is allowed and has dimension 0 (a chain with
/// zero steps consumes no randomness).
#[derive(Debug, Clone)]
pub struct BlockIndependent<D> {
    blocks: Vec<D>,
    dimension: usize,
}

impl<D: InputDistribution> BlockIndependent<D> {
    /// Creates the concatenation of the given blocks, in order.
    pub fn new(blocks: Vec<D>) -> Self {
        let dimension = blocks.iter().map(InputDistribution::dimension).sum();
        Self { blocks, dimension }
    }

    /// Creates the concatenation of `count` independent copies of `block`.
    pub fn repeated(block: D, count: usize) -> Self
    where
        D: Clone,
    {
        Self::new(vec![block; count])
    }

    /// Returns the blocks in concatenation order.
    pub fn blocks(&self) -> &[D] {
        &self.blocks
    }

    /// Returns the number of blocks.
    pub fn number_of_blocks(&self) -> usize {
        self.blocks.len()
    }
}

impl<D: InputDistribution> InputDistribution for BlockIndependent<D> {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn draw_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        debug_assert_eq!(
            out.len(),
            self.dimension,
            "draw buffer must match the concatenated dimension"
        );
        let mut offset = 0;
        for block in &self.blocks {
            let width = block.dimension();
            block.draw_into(rng, &mut out[offset..offset + width]);
            offset += width;
        }
    }

    fn mean(&self) -> Vec<f64> {
        self.blocks.iter().flat_map(InputDistribution::mean).collect()
    }

    fn variance(&self) -> Vec<f64> {
        self.blocks
            .iter()
            .flat_map(InputDistribution::variance)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistrError;
    use crate::joint::JointDistribution;
    use crate::marginal::Marginal;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn step_law() -> Result<JointDistribution, DistrError> {
        JointDistribution::new(vec![
            Marginal::standard_normal(),
            Marginal::weibull(1.0, 1.0)?,
        ])
    }

    #[test]
    fn dimension_is_sum_of_blocks() {
        let aggregated = BlockIndependent::repeated(step_law().unwrap(), 4);
        assert_eq!(aggregated.dimension(), 8);
        assert_eq!(aggregated.number_of_blocks(), 4);
    }

    #[test]
    fn empty_concatenation_has_dimension_zero() {
        let aggregated: BlockIndependent<JointDistribution> = BlockIndependent::new(vec![]);
        assert_eq!(aggregated.dimension(), 0);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(aggregated.draw(&mut rng).is_empty());
        assert!(aggregated.mean().is_empty());
    }

    #[test]
    fn mean_repeats_block_mean() {
        let aggregated = BlockIndependent::repeated(step_law().unwrap(), 3);
        let mean = aggregated.mean();
        assert_eq!(mean.len(), 6);
        for block in mean.chunks_exact(2) {
            assert_relative_eq!(block[0], 0.0);
            assert_relative_eq!(block[1], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn draw_fills_blocks_in_order() {
        // First block strictly positive (exponential), second unconstrained.
        let aggregated = BlockIndependent::new(vec![
            JointDistribution::new(vec![Marginal::exponential(1.0).unwrap()]).unwrap(),
            JointDistribution::new(vec![Marginal::standard_normal()]).unwrap(),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let x = aggregated.draw(&mut rng);
            assert_eq!(x.len(), 2);
            assert!(x[0] >= 0.0);
        }
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let aggregated = BlockIndependent::repeated(step_law().unwrap(), 5);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(aggregated.draw(&mut rng1), aggregated.draw(&mut rng2));
    }

    #[test]
    fn blocks_of_blocks_compose() {
        // Concatenation is itself an InputDistribution, so it nests.
        let inner = BlockIndependent::repeated(step_law().unwrap(), 2);
        let outer = BlockIndependent::repeated(inner, 3);
        assert_eq!(outer.dimension(), 12);
    }
}
