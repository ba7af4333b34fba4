//! The one-step transition contract and its adapters.

use crate::error::ChainError;

/// The one-step transition rule of a chain.
///
/// One application maps the current state and one step's random input to the
/// next state. The receiver is shared (`&self`) and every call threads the
/// state explicitly, so an implementation cannot retain mutated state
/// between evaluations; a step function is freely shareable once built.
///
/// Any `Fn(&[f64], &[f64]) -> Vec<f64>` closure is a step function via the
/// blanket implementation; [`ParametricStep`] adapts functions written
/// against a bound-parameter convention.
pub trait StepFunction {
    /// Applies one transition, mapping `(state, input)` to the next state.
    ///
    /// The returned vector must have the same dimension as `state`.
    fn apply(&self, state: &[f64], input: &[f64]) -> Vec<f64>;

    /// State dimension this step function was declared for, if any.
    ///
    /// A declared dimension is checked eagerly against the initial state at
    /// chain or process construction. Closures declare nothing.
    fn state_dimension(&self) -> Option<usize> {
        None
    }

    /// Per-step random-input dimension this step function was declared for,
    /// if any.
    fn input_dimension(&self) -> Option<usize> {
        None
    }

    /// Labels for the output components, if any, carried through to the
    /// chain function for downstream labelling.
    fn output_labels(&self) -> Option<Vec<String>> {
        None
    }
}

impl<F> StepFunction for F
where
    F: Fn(&[f64], &[f64]) -> Vec<f64>,
{
    fn apply(&self, state: &[f64], input: &[f64]) -> Vec<f64> {
        self(state, input)
    }
}

/// Adapter for step functions written against a bound-parameter convention.
///
/// The underlying function takes one full argument vector of dimension
/// `full_dimension`; `parameter_positions` names the slots that hold the
/// state, and the remaining slots take the step's random input, in order.
/// Each [`apply`](StepFunction::apply) splices state and input into a fresh
/// argument vector, so no parameter slot survives between evaluations.
///
/// # Example
///
/// A lifetime accumulator whose full argument vector is `[T, cumulated_T]`
/// with the cumulated time bound as the state:
///
/// ```
/// use moirai_chain::{ParametricStep, StepFunction};
///
/// let step = ParametricStep::new(
///     |x: &[f64]| vec![x[0] + x[1]],
///     2,
///     vec![1],
/// ).unwrap();
/// assert_eq!(step.apply(&[0.0], &[8.0]), vec![8.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ParametricStep<F> {
    function: F,
    full_dimension: usize,
    parameter_positions: Vec<usize>,
    input_positions: Vec<usize>,
    output_labels: Option<Vec<String>>,
}

impl<F> ParametricStep<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    /// Creates a parametric step.
    ///
    /// `function` evaluates the full argument vector of dimension
    /// `full_dimension`; `parameter_positions` are the slots bound to the
    /// state, in state-component order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::ParameterPositionOutOfRange`] if a position is
    /// not below `full_dimension`, and
    /// [`ChainError::DuplicateParameterPosition`] if a position repeats.
    pub fn new(
        function: F,
        full_dimension: usize,
        parameter_positions: Vec<usize>,
    ) -> Result<Self, ChainError> {
        let mut taken = vec![false; full_dimension];
        for &position in &parameter_positions {
            if position >= full_dimension {
                return Err(ChainError::ParameterPositionOutOfRange {
                    position,
                    full_dimension,
                });
            }
            if taken[position] {
                return Err(ChainError::DuplicateParameterPosition { position });
            }
            taken[position] = true;
        }
        let input_positions = (0..full_dimension).filter(|i| !taken[*i]).collect();
        Ok(Self {
            function,
            full_dimension,
            parameter_positions,
            input_positions,
            output_labels: None,
        })
    }

    /// Attaches labels for the output components.
    pub fn with_output_labels(mut self, labels: Vec<String>) -> Self {
        self.output_labels = Some(labels);
        self
    }

    /// Returns the slots bound to the state.
    pub fn parameter_positions(&self) -> &[usize] {
        &self.parameter_positions
    }

    /// Returns the slots taking the random input.
    pub fn input_positions(&self) -> &[usize] {
        &self.input_positions
    }
}

impl<F> StepFunction for ParametricStep<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn apply(&self, state: &[f64], input: &[f64]) -> Vec<f64> {
        debug_assert_eq!(
            state.len(),
            self.parameter_positions.len(),
            "state must fill every parameter position"
        );
        debug_assert_eq!(
            input.len(),
            self.input_positions.len(),
            "input must fill every free position"
        );
        let mut full = vec![0.0; self.full_dimension];
        for (&position, &value) in self.parameter_positions.iter().zip(state) {
            full[position] = value;
        }
        for (&position, &value) in self.input_positions.iter().zip(input) {
            full[position] = value;
        }
        (self.function)(&full)
    }

    fn state_dimension(&self) -> Option<usize> {
        Some(self.parameter_positions.len())
    }

    fn input_dimension(&self) -> Option<usize> {
        Some(self.input_positions.len())
    }

    fn output_labels(&self) -> Option<Vec<String>> {
        self.output_labels.clone()
    }
}
