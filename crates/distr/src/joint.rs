//! Joint distribution of independent marginals: the per-step input law.

use rand::Rng;

use crate::distribution::InputDistribution;
use crate::error::DistrError;
use crate::marginal::Marginal;

/// The joint law of one step's random input: a product of independent
/// one-dimensional marginals.
///
/// The dimension d of the joint is the number of marginals; component i of
/// every draw comes from marginal i.
///
/// # Example
///
/// ```
/// use moirai_distr::{InputDistribution, JointDistribution, Marginal};
///
/// let step_input = JointDistribution::new(vec![
///     Marginal::standard_normal(),
///     Marginal::standard_normal(),
///     Marginal::weibull(1.0, 1.0).unwrap(),
/// ]).unwrap();
/// assert_eq!(step_input.dimension(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct JointDistribution {
    marginals: Vec<Marginal>,
}

impl JointDistribution {
    /// Creates a joint law from its marginals.
    ///
    /// # Errors
    ///
    /// Returns [`DistrError::EmptyJoint`] if `marginals` is empty.
    pub fn new(marginals: Vec<Marginal>) -> Result<Self, DistrError> {
        if marginals.is_empty() {
            return Err(DistrError::EmptyJoint);
        }
        Ok(Self { marginals })
    }

    /// Returns the marginals in component order.
    pub fn marginals(&self) -> &[Marginal] {
        &self.marginals
    }
}

impl InputDistribution for JointDistribution {
    fn dimension(&self) -> usize {
        self.marginals.len()
    }

    fn draw_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        debug_assert_eq!(
            out.len(),
            self.marginals.len(),
            "draw buffer must match the joint dimension"
        );
        for (slot, marginal) in out.iter_mut().zip(&self.marginals) {
            *slot = marginal.sample_scalar(rng);
        }
    }

    fn mean(&self) -> Vec<f64> {
        self.marginals.iter().map(Marginal::scalar_mean).collect()
    }

    fn variance(&self) -> Vec<f64> {
        self.marginals
            .iter()
            .map(Marginal::scalar_variance)
            .collect()
    }
}
