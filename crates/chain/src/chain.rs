//! Chain configuration and the builder for its derived objects.

use moirai_distr::{BlockIndependent, InputDistribution};
use tracing::debug;

use crate::error::ChainError;
use crate::function::ChainFunction;
use crate::random_vector::CompositeRandomVector;
use crate::step::StepFunction;

/// A discrete-time Markov chain over a fixed number of steps.
///
/// A chain couples a step function, a per-step input distribution of
/// dimension d, a step count N and an initial state. Construction derives,
/// once, the two objects the rest of the pipeline consumes:
///
/// - the aggregated input distribution, the independent concatenation of N
///   copies of the per-step law (dimension N·d);
/// - the chain function, the deterministic fold of the step function over N
///   steps (dimension N·d to state dimension).
///
/// Accessors hand out references to those single instances, so downstream
/// dimension bookkeeping can rely on identity. The configuration is
/// read-only after construction.
///
/// # Example
///
/// ```
/// use moirai_chain::MarkovChain;
/// use moirai_distr::{InputDistribution, JointDistribution, Marginal};
///
/// let step = |state: &[f64], x: &[f64]| vec![state[0] + x[0] * x[1] + x[2]];
/// let step_input = JointDistribution::new(vec![
///     Marginal::standard_normal(),
///     Marginal::standard_normal(),
///     Marginal::weibull(1.0, 1.0).unwrap(),
/// ]).unwrap();
///
/// let chain = MarkovChain::new(step, step_input, 4, vec![0.0]).unwrap();
/// assert_eq!(chain.aggregated_distribution().dimension(), 12);
/// assert_eq!(chain.function().input_dimension(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct MarkovChain<S, D> {
    step_distribution: D,
    aggregated: BlockIndependent<D>,
    function: ChainFunction<S>,
}

impl<S, D> MarkovChain<S, D>
where
    S: StepFunction,
    D: InputDistribution + Clone,
{
    /// Creates a chain configuration and derives its aggregated
    /// distribution and chain function.
    ///
    /// # Errors
    ///
    /// All configuration checks run eagerly here, never at first use:
    ///
    /// - [`ChainError::EmptyInitialState`] for a zero-dimensional state;
    /// - [`ChainError::StateDimensionMismatch`] when the step function
    ///   declares a state dimension other than the initial state's;
    /// - [`ChainError::StepInputDimensionMismatch`] when the step function
    ///   declares a per-step input dimension other than the step
    ///   distribution's.
    pub fn new(
        step: S,
        step_distribution: D,
        number_of_steps: usize,
        initial_state: Vec<f64>,
    ) -> Result<Self, ChainError> {
        if initial_state.is_empty() {
            return Err(ChainError::EmptyInitialState);
        }
        if let Some(declared) = step.state_dimension() {
            if declared != initial_state.len() {
                return Err(ChainError::StateDimensionMismatch {
                    step: declared,
                    state: initial_state.len(),
                });
            }
        }
        if let Some(declared) = step.input_dimension() {
            if declared != step_distribution.dimension() {
                return Err(ChainError::StepInputDimensionMismatch {
                    step: declared,
                    distribution: step_distribution.dimension(),
                });
            }
        }

        let aggregated = BlockIndependent::repeated(step_distribution.clone(), number_of_steps);
        let function = ChainFunction::new(
            step,
            number_of_steps,
            step_distribution.dimension(),
            initial_state,
        );
        debug!(
            steps = number_of_steps,
            input_dimension = aggregated.dimension(),
            state_dimension = function.state_dimension(),
            "chain configured"
        );
        Ok(Self {
            step_distribution,
            aggregated,
            function,
        })
    }

    /// Returns the aggregated input distribution over the whole trajectory.
    ///
    /// The same instance is returned for the chain's lifetime.
    pub fn aggregated_distribution(&self) -> &BlockIndependent<D> {
        &self.aggregated
    }

    /// Returns the chain function, the deterministic fold over all steps.
    ///
    /// The same instance is returned for the chain's lifetime.
    pub fn function(&self) -> &ChainFunction<S> {
        &self.function
    }

    /// Returns the composite random vector coupling the aggregated
    /// distribution with the chain function.
    pub fn output_random_vector(&self) -> CompositeRandomVector<'_, S, D> {
        CompositeRandomVector::new(&self.aggregated, &self.function)
            .expect("a chain's aggregation matches its own function")
    }

    /// Returns the per-step input distribution.
    pub fn step_distribution(&self) -> &D {
        &self.step_distribution
    }

    /// Returns the number of steps.
    pub fn number_of_steps(&self) -> usize {
        self.function.number_of_steps()
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &[f64] {
        self.function.initial_state()
    }
}
