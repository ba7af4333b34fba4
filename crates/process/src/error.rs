//! Error types for the moirai-process crate.

/// Error type for all fallible operations in the moirai-process crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProcessError {
    /// Returned when a process is configured with an empty initial state.
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
}
