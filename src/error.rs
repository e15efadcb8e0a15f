//! Error types for pricing and surface construction

use thiserror::Error;

/// Which sampled axis of a price surface an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Volatility,
    AssetPrice,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Volatility => write!(f, "volatility"),
            Axis::AssetPrice => write!(f, "asset price"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A contract input is out of its domain (non-positive or non-finite).
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A surface axis has no samples, so no surface can be built.
    #[error("degenerate grid: {axis} axis has no samples")]
    DegenerateGrid { axis: Axis },
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub fn degenerate(axis: Axis) -> Self {
        Self::DegenerateGrid { axis }
    }
}

/// Reject NaN, infinities and values `<= 0`.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> PricingResult<f64> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(name, value, "must be > 0"));
    }
    Ok(value)
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value, "must be finite"))
    }
}
