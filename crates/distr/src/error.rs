//! Error types for the moirai-distr crate.

/// Error type for all fallible operations in the moirai-distr crate.
///
/// The `message` fields are `String`s (not rand_distr error types) because
/// the upstream errors do not implement `Clone`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistrError {
    /// Returned when normal parameters are invalid.
    #[error("invalid normal parameters (mean {mean}, std_dev {std_dev}): {message}")]
    InvalidNormal {
        /// The rejected mean.
        mean: f64,
        /// The rejected standard deviation.
        std_dev: f64,
        /// Description of the problem.
        message: String,
    },

    /// Returned when an exponential rate is invalid.
    #[error("invalid exponential rate {rate}: {message}")]
    InvalidExponential {
        /// The rejected rate.
        rate: f64,
        /// Description of the problem.
        message: String,
    },

    /// Returned when Weibull parameters are invalid.
    #[error("invalid weibull parameters (scale {scale}, shape {shape}): {message}")]
    InvalidWeibull {
        /// The rejected scale.
        scale: f64,
        /// The rejected shape.
        shape: f64,
        /// Description of the problem.
        message: String,
    },

    /// Returned when uniform bounds are invalid.
    #[error("invalid uniform bounds [{lower}, {upper}): {message}")]
    InvalidUniform {
        /// The rejected lower bound.
        lower: f64,
        /// The rejected upper bound.
        upper: f64,
        /// Description of the problem.
        message: String,
    },

    /// Returned when a joint distribution is built from zero marginals.
    #[error("joint distribution needs at least one marginal")]
    EmptyJoint,
}
