//! Error types for the moirai-chain crate.

/// Error type for all fallible operations in the moirai-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a chain is configured with an empty initial state.
    #[error("initial state must have at least one component")]
    EmptyInitialState,

    /// Returned at construction when the step function declares a state
    /// dimension that disagrees with the initial state.
    #[error("step function expects a state of dimension {step}, but the initial state has dimension {state}")]
    StateDimensionMismatch {
        /// State dimension declared by the step function.
        step: usize,
        /// Dimension of the provided initial state.
        state: usize,
    },

    /// Returned at construction when the step function declares a per-step
    /// input dimension that disagrees with the step distribution.
    #[error("step function expects an input of dimension {step}, but the step distribution has dimension {distribution}")]
    StepInputDimensionMismatch {
        /// Input dimension declared by the step function.
        step: usize,
        /// Dimension of the provided step distribution.
        distribution: usize,
    },

    /// Returned when an input vector does not have the chain dimension.
    #[error("input vector has dimension {got}, expected {expected}")]
    InputDimensionMismatch {
        /// The chain dimension (number of steps times per-step dimension).
        expected: usize,
        /// Dimension of the offending input.
        got: usize,
    },

    /// Returned when a row of an externally supplied point batch does not
    /// have the chain dimension.
    #[error("batch row {row} has dimension {got}, expected {expected}")]
    BatchRowDimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// The chain dimension.
        expected: usize,
        /// Dimension of the offending row.
        got: usize,
    },

    /// Returned when a parametric step declares a parameter position
    /// outside its full argument vector.
    #[error("parameter position {position} is out of range for a function of dimension {full_dimension}")]
    ParameterPositionOutOfRange {
        /// The offending position.
        position: usize,
        /// Dimension of the full argument vector.
        full_dimension: usize,
    },

    /// Returned when a parametric step declares the same parameter position
    /// twice.
    #[error("parameter position {position} is declared more than once")]
    DuplicateParameterPosition {
        /// The repeated position.
        position: usize,
    },
}
