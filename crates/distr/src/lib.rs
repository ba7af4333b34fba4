//! Input distributions for the moirai composition engine.
//!
//! This crate is the probability seam of the workspace: it defines the
//! [`InputDistribution`] contract (dimension, i.i.d. draws, moment queries)
//! and the concrete laws the chain and process crates consume.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────┐     ┌────────────────────┐     ┌───────────────────┐
//!  │  Marginal   │────▶│  JointDistribution  │────▶│  BlockIndependent  │
//!  │  (1-dim)    │     │  (per-step, dim d)  │     │  (trajectory, N·d) │
//!  └────────────┘     └────────────────────┘     └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use moirai_distr::{BlockIndependent, InputDistribution, JointDistribution, Marginal};
//! use rand::SeedableRng;
//!
//! let step_input = JointDistribution::new(vec![
//!     Marginal::standard_normal(),
//!     Marginal::weibull(1.0, 1.0).unwrap(),
//! ]).unwrap();
//! let aggregated = BlockIndependent::repeated(step_input, 4);
//! assert_eq!(aggregated.dimension(), 8);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let draw = aggregated.draw(&mut rng);
//! assert_eq!(draw.len(), 8);
//! ```

pub mod block;
pub mod distribution;
pub mod error;
pub mod joint;
pub mod marginal;

pub use block::BlockIndependent;
pub use distribution::InputDistribution;
pub use error::DistrError;
pub use joint::JointDistribution;
pub use marginal::Marginal;
