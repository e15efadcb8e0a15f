use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Axis, PricingError, PricingResult};

/// Number of volatility samples on the dashboard surface.
pub const VOLATILITY_SAMPLES: usize = 10;
/// Number of asset price samples on the dashboard surface.
pub const ASSET_PRICE_SAMPLES: usize = 50;

/// An evenly spaced sample axis, `count` points from `min` to `max` inclusive.
///
/// `min > max` is allowed and yields a descending axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleAxis {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SampleAxis {
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    pub fn volatility(min: f64, max: f64) -> Self {
        Self::new(min, max, VOLATILITY_SAMPLES)
    }

    pub fn asset_price(min: f64, max: f64) -> Self {
        Self::new(min, max, ASSET_PRICE_SAMPLES)
    }

    /// Check that the axis yields at least one sample and that every sample
    /// is finite and strictly positive.
    ///
    /// Both ends positive is enough: interior samples lie between them.
    pub fn validate(&self, axis: Axis) -> PricingResult<()> {
        if self.count == 0 {
            return Err(PricingError::degenerate(axis));
        }
        let (min_name, max_name) = match axis {
            Axis::Volatility => ("volatility_axis.min", "volatility_axis.max"),
            Axis::AssetPrice => ("asset_price_axis.min", "asset_price_axis.max"),
        };
        ensure_positive(min_name, self.min)?;
        ensure_positive(max_name, self.max)?;
        Ok(())
    }

    /// Materialize the samples. Endpoints are exact.
    pub fn samples(&self, axis: Axis) -> PricingResult<Vec<f64>> {
        self.validate(axis)?;
        Ok(linspace(self.min, self.max, self.count))
    }
}

/// `count` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let xs = linspace(0.01, 1.0, VOLATILITY_SAMPLES);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 0.01);
        assert_eq!(xs[9], 1.0);
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - 0.11).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_descending_axis() {
        let xs = SampleAxis::new(1.0, 0.5, 3).samples(Axis::Volatility).unwrap();
        assert_eq!(xs, vec![1.0, 0.75, 0.5]);
    }

    #[test]
    fn test_zero_count_is_degenerate() {
        let axis = SampleAxis::new(0.1, 200.0, 0);
        assert_eq!(
            axis.samples(Axis::AssetPrice),
            Err(PricingError::DegenerateGrid {
                axis: Axis::AssetPrice
            })
        );
    }

    #[test]
    fn test_non_positive_bounds_rejected() {
        let axis = SampleAxis::new(-0.5, 1.0, 10);
        assert!(matches!(
            axis.validate(Axis::Volatility),
            Err(PricingError::InvalidParameter {
                name: "volatility_axis.min",
                ..
            })
        ));
        let axis = SampleAxis::new(200.0, 0.0, 50);
        assert!(matches!(
            axis.samples(Axis::AssetPrice),
            Err(PricingError::InvalidParameter {
                name: "asset_price_axis.max",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let axis = SampleAxis::new(f64::NAN, 1.0, 10);
        assert!(axis.validate(Axis::Volatility).is_err());
    }
}
