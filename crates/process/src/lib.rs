//! Bounded-horizon piecewise-deterministic Markov process simulation.
//!
//! Where the chain crate folds a fixed number of steps into one vector
//! function, this crate simulates trajectories whose length is itself
//! random: after every transition a stopping rule inspects the new state,
//! and a maximum step count bounds the run unconditionally.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//!  │ StepFunction  │────▶│  MarkovProcess  │────▶│  ChainResult  │
//!  │ + StoppingRule│     │  (simulate)     │     │  (history)    │
//!  └──────────────┘     └────────────────┘     └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use moirai_distr::{JointDistribution, Marginal};
//! use moirai_process::{ExceedsThreshold, MarkovProcess};
//! use rand::SeedableRng;
//!
//! let step = |state: &[f64], x: &[f64]| vec![state[0] + x[0]];
//! let lifetime = JointDistribution::new(vec![
//!     Marginal::exponential(0.1).unwrap(),
//! ]).unwrap();
//!
//! let process = MarkovProcess::new(
//!     step,
//!     lifetime,
//!     ExceedsThreshold::new(0, 20.0),
//!     10,
//!     vec![0.0],
//! ).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let result = process.simulate(&mut rng);
//! assert_eq!(result.history().len(), result.number_of_steps() + 1);
//! ```

pub mod error;
pub mod process;
pub mod result;
pub mod stop;

pub use error::ProcessError;
pub use process::MarkovProcess;
pub use result::{ChainResult, StopReason};
pub use stop::{ExceedsThreshold, StoppingRule};
