//! The samplable coupling of an aggregated distribution with a chain
//! function.

use moirai_distr::{BlockIndependent, InputDistribution};
use rand::Rng;

use crate::error::ChainError;
use crate::function::ChainFunction;
use crate::step::StepFunction;

/// A composite random vector: a distribution paired with a deterministic
/// function, sampled by drawing from the one and evaluating the other.
///
/// Both halves are borrowed from the owning [`MarkovChain`]; the vector
/// itself holds no state, and every realization is independent.
///
/// The function half remains directly reachable for externally generated
/// input batches (for example a low-discrepancy design mapped into the
/// input marginals): [`evaluate_batch`](Self::evaluate_batch) never touches
/// the distribution beyond the dimension agreement checked at construction.
///
/// [`MarkovChain`]: crate::MarkovChain
#[derive(Debug)]
pub struct CompositeRandomVector<'a, S, D> {
    distribution: &'a BlockIndependent<D>,
    function: &'a ChainFunction<S>,
}

impl<'a, S, D> CompositeRandomVector<'a, S, D>
where
    S: StepFunction,
    D: InputDistribution,
{
    /// Couples a distribution with a function of the same input dimension.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InputDimensionMismatch`] if the dimensions
    /// disagree.
    pub fn new(
        distribution: &'a BlockIndependent<D>,
        function: &'a ChainFunction<S>,
    ) -> Result<Self, ChainError> {
        if distribution.dimension() != function.input_dimension() {
            return Err(ChainError::InputDimensionMismatch {
                expected: function.input_dimension(),
                got: distribution.dimension(),
            });
        }
        Ok(Self {
            distribution,
            function,
        })
    }

    /// Returns the input dimension of the coupled pair.
    pub fn dimension(&self) -> usize {
        self.function.input_dimension()
    }

    /// Returns the state (output) dimension.
    pub fn state_dimension(&self) -> usize {
        self.function.state_dimension()
    }

    /// Draws one input vector and returns the resulting final state.
    ///
    /// Each call draws fresh randomness; nothing is retained between calls.
    pub fn realization<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut input = vec![0.0; self.distribution.dimension()];
        self.distribution.draw_into(rng, &mut input);
        self.function
            .evaluate(&input)
            .expect("drawn input matches the chain dimension")
    }

    /// Draws `size` independent realizations, in draw order.
    ///
    /// Equivalent to `size` calls to [`realization`](Self::realization) on
    /// the same random source.
    pub fn sample<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<Vec<f64>> {
        let mut states = Vec::with_capacity(size);
        let mut input = vec![0.0; self.distribution.dimension()];
        for _ in 0..size {
            self.distribution.draw_into(rng, &mut input);
            states.push(
                self.function
                    .evaluate(&input)
                    .expect("drawn input matches the chain dimension"),
            );
        }
        states
    }

    /// Evaluates the chain function pointwise on an externally supplied
    /// point set.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::BatchRowDimensionMismatch`] if a row does not
    /// have the chain dimension.
    pub fn evaluate_batch(&self, points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ChainError> {
        self.function.evaluate_batch(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::MarkovChain;
    use moirai_distr::{JointDistribution, Marginal};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type PqrStep = fn(&[f64], &[f64]) -> Vec<f64>;

    fn pqr_chain(number_of_steps: usize) -> MarkovChain<PqrStep, JointDistribution> {
        fn step(state: &[f64], input: &[f64]) -> Vec<f64> {
            vec![state[0] + input[0] * input[1] + input[2]]
        }
        let law = JointDistribution::new(vec![
            Marginal::standard_normal(),
            Marginal::standard_normal(),
            Marginal::weibull(1.0, 1.0).unwrap(),
        ])
        .unwrap();
        MarkovChain::new(step as PqrStep, law, number_of_steps, vec![0.0]).unwrap()
    }

    #[test]
    fn dimensions_follow_the_chain() {
        let chain = pqr_chain(4);
        let vector = chain.output_random_vector();
        assert_eq!(vector.dimension(), 12);
        assert_eq!(vector.state_dimension(), 1);
    }

    #[test]
    fn mismatched_halves_are_rejected() {
        let four_steps = pqr_chain(4);
        let three_steps = pqr_chain(3);
        let result = CompositeRandomVector::new(
            four_steps.aggregated_distribution(),
            three_steps.function(),
        );
        assert!(matches!(
            result,
            Err(ChainError::InputDimensionMismatch {
                expected: 9,
                got: 12
            })
        ));
    }

    #[test]
    fn realization_has_state_dimension() {
        let chain = pqr_chain(4);
        let vector = chain.output_random_vector();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(vector.realization(&mut rng).len(), 1);
    }

    #[test]
    fn sample_equals_repeated_realizations_under_one_seed() {
        let chain = pqr_chain(4);
        let vector = chain.output_random_vector();

        let mut rng_sample = StdRng::seed_from_u64(123);
        let sample = vector.sample(5, &mut rng_sample);

        let mut rng_repeat = StdRng::seed_from_u64(123);
        let repeated: Vec<Vec<f64>> =
            (0..5).map(|_| vector.realization(&mut rng_repeat)).collect();

        assert_eq!(sample, repeated);
    }

    #[test]
    fn zero_step_vector_realizes_the_initial_state() {
        let chain = pqr_chain(0);
        let vector = chain.output_random_vector();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(vector.realization(&mut rng), vec![0.0]);
        assert_eq!(vector.sample(3, &mut rng), vec![vec![0.0]; 3]);
    }

    #[test]
    fn batch_path_bypasses_the_distribution() {
        let chain = pqr_chain(1);
        let vector = chain.output_random_vector();
        let batch = vector
            .evaluate_batch(&[vec![1.794, 2.387, -2.123]])
            .unwrap();
        assert!((batch[0][0] - 2.159278).abs() < 1e-4);
    }
}
