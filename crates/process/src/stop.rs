//! Stopping rules for trajectory simulation.

/// Decides, after each transition, whether a trajectory must stop.
///
/// A rule is evaluated on the post-transition state and must be pure: the
/// simulator may call it any number of times and relies on nothing but the
/// returned boolean. Interior mutability for logging is tolerated but never
/// load-bearing.
///
/// Any `Fn(&[f64]) -> bool` closure is a stopping rule via the blanket
/// implementation.
pub trait StoppingRule {
    /// Returns `true` if the trajectory must stop in `state`.
    fn must_stop(&self, state: &[f64]) -> bool;
}

impl<F> StoppingRule for F
where
    F: Fn(&[f64]) -> bool,
{
    fn must_stop(&self, state: &[f64]) -> bool {
        self(state)
    }
}

/// Stops once a state component exceeds a threshold.
///
/// The workhorse rule for lifetime models: stop when the cumulated time
/// passes the mission horizon.
///
/// # Example
///
/// ```
/// use moirai_process::{ExceedsThreshold, StoppingRule};
///
/// let rule = ExceedsThreshold::new(0, 20.0);
/// assert!(!rule.must_stop(&[14.5]));
/// assert!(rule.must_stop(&[20.1]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExceedsThreshold {
    component: usize,
    threshold: f64,
}

impl ExceedsThreshold {
    /// Creates a rule watching `component` against `threshold`.
    pub fn new(component: usize, threshold: f64) -> Self {
        Self {
            component,
            threshold,
        }
    }

    /// Returns the watched state component.
    pub fn component(&self) -> usize {
        self.component
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl StoppingRule for ExceedsThreshold {
    /// # Panics
    ///
    /// Panics if the watched component is out of range for `state`.
    fn must_stop(&self, state: &[f64]) -> bool {
        state[self.component] > self.threshold
    }
}
