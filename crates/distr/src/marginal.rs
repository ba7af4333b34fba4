//! One-dimensional marginal laws backed by `rand_distr` samplers.

use rand::Rng;
use rand::distr::Uniform;
use rand_distr::{Distribution, Exp, Normal, Weibull};
use statrs::function::gamma::gamma;

use crate::distribution::InputDistribution;
use crate::error::DistrError;

/// A validated one-dimensional marginal law.
///
/// Parameters are checked once at construction and the `rand_distr` sampler
/// is built once and reused for every draw. Moments are answered in closed
/// form from the stored parameters.
///
/// # Example
///
/// ```
/// use moirai_distr::{InputDistribution, Marginal};
///
/// let r = Marginal::weibull(1.0, 1.0).unwrap();
/// assert!((r.mean()[0] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Marginal {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Normal {
        dist: Normal<f64>,
        mean: f64,
        std_dev: f64,
    },
    Exponential {
        dist: Exp<f64>,
        rate: f64,
    },
    Weibull {
        dist: Weibull<f64>,
        scale: f64,
        shape: f64,
    },
    Uniform {
        dist: Uniform<f64>,
        lower: f64,
        upper: f64,
    },
}

impl Marginal {
    /// Creates a normal law with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`DistrError::InvalidNormal`] unless `mean` is finite and
    /// `std_dev` is finite and strictly positive.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, DistrError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DistrError::InvalidNormal {
                mean,
                std_dev,
                message: "mean must be finite, std_dev finite and > 0".to_string(),
            });
        }
        let dist = Normal::new(mean, std_dev).map_err(|e| DistrError::InvalidNormal {
            mean,
            std_dev,
            message: e.to_string(),
        })?;
        Ok(Self {
            kind: Kind::Normal {
                dist,
                mean,
                std_dev,
            },
        })
    }

    /// Creates the standard normal law N(0, 1).
    pub fn standard_normal() -> Self {
        Self::normal(0.0, 1.0).expect("standard normal parameters are valid")
    }

    /// Creates an exponential law with the given rate.
    ///
    /// The mean is `1 / rate`.
    ///
    /// # Errors
    ///
    /// Returns [`DistrError::InvalidExponential`] unless `rate` is finite
    /// and strictly positive.
    pub fn exponential(rate: f64) -> Result<Self, DistrError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DistrError::InvalidExponential {
                rate,
                message: "rate must be finite and > 0".to_string(),
            });
        }
        let dist = Exp::new(rate).map_err(|e| DistrError::InvalidExponential {
            rate,
            message: e.to_string(),
        })?;
        Ok(Self {
            kind: Kind::Exponential { dist, rate },
        })
    }

    /// Creates a Weibull law with the given scale and shape.
    ///
    /// The mean is `scale * gamma(1 + 1/shape)`; scale 1, shape 1 gives the
    /// unit exponential (mean 1).
    ///
    /// # Errors
    ///
    /// Returns [`DistrError::InvalidWeibull`] unless both parameters are
    /// finite and strictly positive.
    pub fn weibull(scale: f64, shape: f64) -> Result<Self, DistrError> {
        if !scale.is_finite() || scale <= 0.0 || !shape.is_finite() || shape <= 0.0 {
            return Err(DistrError::InvalidWeibull {
                scale,
                shape,
                message: "scale and shape must be finite and > 0".to_string(),
            });
        }
        let dist = Weibull::new(scale, shape).map_err(|e| DistrError::InvalidWeibull {
            scale,
            shape,
            message: e.to_string(),
        })?;
        Ok(Self {
            kind: Kind::Weibull { dist, scale, shape },
        })
    }

    /// Creates a uniform law on the half-open interval `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns [`DistrError::InvalidUniform`] unless both bounds are finite
    /// and `lower < upper`.
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, DistrError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DistrError::InvalidUniform {
                lower,
                upper,
                message: "bounds must be finite with lower < upper".to_string(),
            });
        }
        let dist = Uniform::new(lower, upper).map_err(|e| DistrError::InvalidUniform {
            lower,
            upper,
            message: e.to_string(),
        })?;
        Ok(Self {
            kind: Kind::Uniform { dist, lower, upper },
        })
    }

    pub(crate) fn sample_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.kind {
            Kind::Normal { dist, .. } => dist.sample(rng),
            Kind::Exponential { dist, .. } => dist.sample(rng),
            Kind::Weibull { dist, .. } => dist.sample(rng),
            Kind::Uniform { dist, .. } => dist.sample(rng),
        }
    }

    pub(crate) fn scalar_mean(&self) -> f64 {
        match &self.kind {
            Kind::Normal { mean, .. } => *mean,
            Kind::Exponential { rate, .. } => 1.0 / rate,
            Kind::Weibull { scale, shape, .. } => scale * gamma(1.0 + 1.0 / shape),
            Kind::Uniform { lower, upper, .. } => (lower + upper) / 2.0,
        }
    }

    pub(crate) fn scalar_variance(&self) -> f64 {
        match &self.kind {
            Kind::Normal { std_dev, .. } => std_dev * std_dev,
            Kind::Exponential { rate, .. } => 1.0 / (rate * rate),
            Kind::Weibull { scale, shape, .. } => {
                let g1 = gamma(1.0 + 1.0 / shape);
                let g2 = gamma(1.0 + 2.0 / shape);
                scale * scale * (g2 - g1 * g1)
            }
            Kind::Uniform { lower, upper, .. } => {
                let width = upper - lower;
                width * width / 12.0
            }
        }
    }
}

impl InputDistribution for Marginal {
    fn dimension(&self) -> usize {
        1
    }

    fn draw_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        debug_assert_eq!(out.len(), 1, "marginal draws are one-dimensional");
        out[0] = self.sample_scalar(rng);
    }

    fn mean(&self) -> Vec<f64> {
        vec![self.scalar_mean()]
    }

    fn variance(&self) -> Vec<f64> {
        vec![self.scalar_variance()]
    }
}
