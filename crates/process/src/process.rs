//! Bounded-horizon trajectory simulation.

use moirai_chain::StepFunction;
use moirai_distr::InputDistribution;
use rand::Rng;
use tracing::debug;

use crate::error::ProcessError;
use crate::result::{ChainResult, StopReason};
use crate::stop::StoppingRule;

/// A piecewise-deterministic Markov process on a finite horizon.
///
/// Unlike the fixed-length chain, a process draws one step's input at a
/// time and lets a stopping rule cut the trajectory short: the trajectory
/// length is itself random, bounded by `maximum_number_of_steps`. This is
/// the right tool when the stopping time is data-dependent; the aggregated
/// fixed-dimension form cannot express it.
///
/// # Example
///
/// ```
/// use moirai_distr::{JointDistribution, Marginal};
/// use moirai_process::{ExceedsThreshold, MarkovProcess, StopReason};
/// use rand::SeedableRng;
///
/// // Cumulated component lifetime, one exponential lifetime per step.
/// let step = |state: &[f64], x: &[f64]| vec![state[0] + x[0]];
/// let lifetime = JointDistribution::new(vec![
///     Marginal::exponential(0.1).unwrap(),
/// ]).unwrap();
///
/// let process = MarkovProcess::new(
///     step,
///     lifetime,
///     ExceedsThreshold::new(0, 20.0),
///     10,
///     vec![0.0],
/// ).unwrap();
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let result = process.simulate(&mut rng);
/// assert!(result.number_of_steps() <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct MarkovProcess<S, D, P> {
    step: S,
    distribution: D,
    stop: P,
    maximum_number_of_steps: usize,
    initial_state: Vec<f64>,
}

impl<S, D, P> MarkovProcess<S, D, P>
where
    S: StepFunction,
    D: InputDistribution,
    P: StoppingRule,
{
    /// Creates a process configuration.
    ///
    /// # Errors
    ///
    /// The same eager configuration checks as the chain builder:
    /// [`ProcessError::EmptyInitialState`],
    /// [`ProcessError::StateDimensionMismatch`] and
    /// [`ProcessError::StepInputDimensionMismatch`].
    pub fn new(
        step: S,
        distribution: D,
        stop: P,
        maximum_number_of_steps: usize,
        initial_state: Vec<f64>,
    ) -> Result<Self, ProcessError> {
        if initial_state.is_empty() {
            return Err(ProcessError::EmptyInitialState);
        }
        if let Some(declared) = step.state_dimension() {
            if declared != initial_state.len() {
                return Err(ProcessError::StateDimensionMismatch {
                    step: declared,
                    state: initial_state.len(),
                });
            }
        }
        if let Some(declared) = step.input_dimension() {
            if declared != distribution.dimension() {
                return Err(ProcessError::StepInputDimensionMismatch {
                    step: declared,
                    distribution: distribution.dimension(),
                });
            }
        }
        Ok(Self {
            step,
            distribution,
            stop,
            maximum_number_of_steps,
            initial_state,
        })
    }

    /// Returns the maximum number of steps in one trajectory.
    pub fn maximum_number_of_steps(&self) -> usize {
        self.maximum_number_of_steps
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &[f64] {
        &self.initial_state
    }

    /// Returns the per-step input distribution.
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Simulates one trajectory.
    ///
    /// Starting from the initial state, each iteration draws one step's
    /// input, applies the step function to the pre-transition state,
    /// appends the new state to the history and evaluates the stopping
    /// rule. The run terminates when the rule fires or the horizon is
    /// exhausted, whichever comes first.
    ///
    /// Every call draws fresh randomness and is independent of any other
    /// call; the history never holds more than
    /// `maximum_number_of_steps + 1` states.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> ChainResult {
        let mut state = self.initial_state.clone();
        let mut history = Vec::with_capacity(self.maximum_number_of_steps + 1);
        history.push(state.clone());
        let mut input = vec![0.0; self.distribution.dimension()];
        let mut stop_reason = StopReason::Horizon;

        for step in 0..self.maximum_number_of_steps {
            self.distribution.draw_into(rng, &mut input);
            state = self.step.apply(&state, &input);
            debug_assert_eq!(
                state.len(),
                self.initial_state.len(),
                "step output must keep the state dimension"
            );
            history.push(state.clone());
            if self.stop.must_stop(&state) {
                debug!(steps = step + 1, "stopping rule fired");
                stop_reason = StopReason::Predicate;
                break;
            }
        }
        if stop_reason == StopReason::Horizon {
            debug!(steps = history.len() - 1, "horizon exhausted");
        }
        ChainResult::new(history, stop_reason)
    }
}
