//! Fixed-length Markov chain composition.
//!
//! This crate turns a one-step transition rule into a single deterministic
//! vector function over one trajectory-sized vector of independent random
//! inputs, ready for Monte-Carlo sampling or externally generated
//! low-discrepancy designs.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌───────────────────────┐
//!  │ StepFunction  │────▶│   MarkovChain     │────▶│ CompositeRandomVector  │
//!  │ (one step)    │     │ (aggregate, fold) │     │ (realize / sample)     │
//!  └──────────────┘     └──────────────────┘     └───────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use moirai_chain::MarkovChain;
//! use moirai_distr::{JointDistribution, Marginal};
//! use rand::SeedableRng;
//!
//! // One step: state + P*Q + R.
//! let step = |state: &[f64], x: &[f64]| vec![state[0] + x[0] * x[1] + x[2]];
//! let step_input = JointDistribution::new(vec![
//!     Marginal::standard_normal(),
//!     Marginal::standard_normal(),
//!     Marginal::weibull(1.0, 1.0).unwrap(),
//! ]).unwrap();
//!
//! let chain = MarkovChain::new(step, step_input, 4, vec![0.0]).unwrap();
//! let vector = chain.output_random_vector();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let final_state = vector.realization(&mut rng);
//! assert_eq!(final_state.len(), 1);
//! ```

pub mod chain;
pub mod error;
pub mod function;
pub mod random_vector;
pub mod step;

pub use chain::MarkovChain;
pub use error::ChainError;
pub use function::ChainFunction;
pub use random_vector::CompositeRandomVector;
pub use step::{ParametricStep, StepFunction};
