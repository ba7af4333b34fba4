//! The deterministic fold of a step function over a fixed number of steps.

use crate::error::ChainError;
use crate::step::StepFunction;

/// The deterministic map from one trajectory-sized input vector to the
/// final state.
///
/// An input of dimension `number_of_steps * step_input_dimension` is
/// consumed in successive per-step blocks, in step order: the state starts
/// at the chain's initial state and the step function is applied once per
/// block. The state is re-established from the initial state on every call,
/// so evaluations on different inputs are fully independent.
///
/// A chain function is a plain deterministic function: besides sampling,
/// it evaluates any externally supplied point set of the right dimension,
/// such as a low-discrepancy design mapped into the input marginals.
#[derive(Debug, Clone)]
pub struct ChainFunction<S> {
    step: S,
    number_of_steps: usize,
    step_input_dimension: usize,
    initial_state: Vec<f64>,
    output_labels: Option<Vec<String>>,
}

impl<S: StepFunction> ChainFunction<S> {
    pub(crate) fn new(
        step: S,
        number_of_steps: usize,
        step_input_dimension: usize,
        initial_state: Vec<f64>,
    ) -> Self {
        debug_assert!(step_input_dimension > 0, "per-step input dimension is at least 1");
        debug_assert!(!initial_state.is_empty(), "state has at least one component");
        let output_labels = step.output_labels();
        Self {
            step,
            number_of_steps,
            step_input_dimension,
            initial_state,
            output_labels,
        }
    }

    /// Returns the input dimension, `number_of_steps` times the per-step
    /// input dimension.
    pub fn input_dimension(&self) -> usize {
        self.number_of_steps * self.step_input_dimension
    }

    /// Returns the state (output) dimension.
    pub fn state_dimension(&self) -> usize {
        self.initial_state.len()
    }

    /// Returns the number of steps in the fold.
    pub fn number_of_steps(&self) -> usize {
        self.number_of_steps
    }

    /// Returns the initial state the fold starts from.
    pub fn initial_state(&self) -> &[f64] {
        &self.initial_state
    }

    /// Returns the output component labels inherited from the step
    /// function, if any.
    pub fn output_labels(&self) -> Option<&[String]> {
        self.output_labels.as_deref()
    }

    /// Evaluates the fold on one input vector.
    ///
    /// A chain of zero steps ignores its (empty) input and returns the
    /// initial state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InputDimensionMismatch`] if `input` does not
    /// have exactly [`input_dimension()`](Self::input_dimension) components.
    pub fn evaluate(&self, input: &[f64]) -> Result<Vec<f64>, ChainError> {
        let expected = self.input_dimension();
        if input.len() != expected {
            return Err(ChainError::InputDimensionMismatch {
                expected,
                got: input.len(),
            });
        }
        if self.number_of_steps == 0 {
            return Ok(self.initial_state.clone());
        }
        let mut state = self.initial_state.clone();
        for block in input.chunks_exact(self.step_input_dimension) {
            state = self.step.apply(&state, block);
            debug_assert_eq!(
                state.len(),
                self.initial_state.len(),
                "step output must keep the state dimension"
            );
        }
        Ok(state)
    }

    /// Evaluates the fold pointwise on an externally supplied point set.
    ///
    /// Rows are evaluated in order; the output has one final state per row.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::BatchRowDimensionMismatch`] naming the first
    /// offending row if any row does not have the chain dimension.
    pub fn evaluate_batch(&self, points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ChainError> {
        points
            .iter()
            .enumerate()
            .map(|(row, point)| {
                self.evaluate(point).map_err(|e| match e {
                    ChainError::InputDimensionMismatch { expected, got } => {
                        ChainError::BatchRowDimensionMismatch { row, expected, got }
                    }
                    other => other,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pqr_function(number_of_steps: usize) -> ChainFunction<impl StepFunction> {
        let step = |state: &[f64], input: &[f64]| {
            vec![state[0] + input[0] * input[1] + input[2]]
        };
        ChainFunction::new(step, number_of_steps, 3, vec![0.0])
    }

    #[test]
    fn one_step_matches_hand_computation() {
        let function = pqr_function(1);
        let out = function.evaluate(&[1.794, 2.387, -2.123]).unwrap();
        assert_relative_eq!(out[0], 1.794 * 2.387 - 2.123, epsilon = 1e-12);
        assert_relative_eq!(out[0], 2.159278, epsilon = 1e-4);
    }

    #[test]
    fn blocks_are_consumed_in_step_order() {
        // state_{k+1} = state_k + P*Q + R per block.
        let function = pqr_function(2);
        let out = function
            .evaluate(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .unwrap();
        assert_relative_eq!(out[0], (1.0 * 2.0 + 3.0) + (4.0 * 5.0 + 6.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_is_identity_on_initial_state() {
        let step = |state: &[f64], _input: &[f64]| state.to_vec();
        let function = ChainFunction::new(step, 0, 3, vec![42.0, -1.0]);
        assert_eq!(function.input_dimension(), 0);
        assert_eq!(function.evaluate(&[]).unwrap(), vec![42.0, -1.0]);
    }

    #[test]
    fn wrong_dimension_is_rejected() {
        let function = pqr_function(4);
        let result = function.evaluate(&[0.0; 11]);
        assert!(matches!(
            result,
            Err(ChainError::InputDimensionMismatch {
                expected: 12,
                got: 11
            })
        ));
    }

    #[test]
    fn evaluations_are_independent() {
        // Same input twice around an unrelated evaluation: the state must be
        // re-established from the initial state each time.
        let function = pqr_function(1);
        let first = function.evaluate(&[1.0, 1.0, 1.0]).unwrap();
        let _ = function.evaluate(&[9.0, 9.0, 9.0]).unwrap();
        let second = function.evaluate(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_agrees_with_pointwise_evaluation() {
        let function = pqr_function(2);
        let points = vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0; 6],
            vec![-1.0, 1.0, 0.5, 2.0, -2.0, 0.25],
        ];
        let batch = function.evaluate_batch(&points).unwrap();
        for (point, out) in points.iter().zip(&batch) {
            assert_eq!(out, &function.evaluate(point).unwrap());
        }
    }

    #[test]
    fn batch_names_the_offending_row() {
        let function = pqr_function(1);
        let points = vec![vec![0.0; 3], vec![0.0; 2]];
        let result = function.evaluate_batch(&points);
        assert!(matches!(
            result,
            Err(ChainError::BatchRowDimensionMismatch {
                row: 1,
                expected: 3,
                got: 2
            })
        ));
    }
}
