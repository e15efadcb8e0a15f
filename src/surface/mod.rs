//! Price surfaces over a (volatility × asset price) grid
//!
//! A [`PriceSurface`] stores one exact model evaluation per grid cell. Rows
//! follow the asset price samples and columns the volatility samples, which
//! is the `z[y][x]` layout surface plots expect with volatility on the x axis
//! and asset price on the y axis.
//!
//! # Example
//!
//! ```rust
//! use bsm_surface::{price_surface, BlackScholes, ContractParameters, OptionKind};
//!
//! let engine = BlackScholes::new(ContractParameters::default())?;
//! let surface = price_surface(&engine, &[0.1, 0.2, 0.3], &[90.0, 100.0, 110.0], OptionKind::Call)?;
//!
//! assert_eq!(surface.rows(), 3);
//! assert_eq!(surface.cols(), 3);
//! # Ok::<(), bsm_surface::PricingError>(())
//! ```

pub mod axis;
pub mod export;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, Axis, PricingError, PricingResult};
use crate::models::traits::OptionPricer;
use crate::models::OptionKind;

pub use axis::{linspace, SampleAxis, ASSET_PRICE_SAMPLES, VOLATILITY_SAMPLES};

/// Model prices on a grid, indexed `[asset price row][volatility column]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSurface {
    pub kind: OptionKind,
    /// Volatility samples (columns, x axis)
    pub volatilities: Vec<f64>,
    /// Asset price samples (rows, y axis)
    pub asset_prices: Vec<f64>,
    /// Prices, one row per asset price sample
    pub values: Vec<Vec<f64>>,
}

impl PriceSurface {
    pub fn rows(&self) -> usize {
        self.asset_prices.len()
    }

    pub fn cols(&self) -> usize {
        self.volatilities.len()
    }

    /// Price at asset price row `i` and volatility column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Every cell as `(asset_price, volatility, price)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.asset_prices
            .iter()
            .zip(&self.values)
            .flat_map(move |(&s, row)| {
                self.volatilities
                    .iter()
                    .zip(row)
                    .map(move |(&vol, &price)| (s, vol, price))
            })
    }

    pub fn min_price(&self) -> f64 {
        self.cells().fold(f64::INFINITY, |acc, (_, _, p)| acc.min(p))
    }

    pub fn max_price(&self) -> f64 {
        self.cells()
            .fold(f64::NEG_INFINITY, |acc, (_, _, p)| acc.max(p))
    }
}

/// Call and put surfaces built over the same axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePair {
    pub call: PriceSurface,
    pub put: PriceSurface,
}

impl SurfacePair {
    pub fn get(&self, kind: OptionKind) -> &PriceSurface {
        match kind {
            OptionKind::Call => &self.call,
            OptionKind::Put => &self.put,
        }
    }
}

/// Evaluate `pricer` at every (volatility, asset price) pair.
///
/// Cell `[i][j]` is `pricer.price(volatility_samples[j], asset_price_samples[i], kind)`.
/// Cells are independent; there is no interpolation between them.
///
/// # Errors
///
/// * [`PricingError::DegenerateGrid`] if either sample slice is empty
/// * [`PricingError::InvalidParameter`] named `volatility_sample` or
///   `asset_price_sample` if any sample is non-positive or non-finite, or
///   from the pricer itself for a cell it cannot price
pub fn price_surface<P: OptionPricer + ?Sized>(
    pricer: &P,
    volatility_samples: &[f64],
    asset_price_samples: &[f64],
    kind: OptionKind,
) -> PricingResult<PriceSurface> {
    if volatility_samples.is_empty() {
        return Err(PricingError::degenerate(Axis::Volatility));
    }
    if asset_price_samples.is_empty() {
        return Err(PricingError::degenerate(Axis::AssetPrice));
    }
    for &vol in volatility_samples {
        ensure_positive("volatility_sample", vol)?;
    }
    for &s in asset_price_samples {
        ensure_positive("asset_price_sample", s)?;
    }

    let values = asset_price_samples
        .iter()
        .map(|&s| {
            volatility_samples
                .iter()
                .map(|&vol| pricer.price(vol, s, kind))
                .collect::<PricingResult<Vec<f64>>>()
        })
        .collect::<PricingResult<Vec<Vec<f64>>>>()?;

    debug!(
        %kind,
        rows = asset_price_samples.len(),
        cols = volatility_samples.len(),
        "price surface built"
    );

    Ok(PriceSurface {
        kind,
        volatilities: volatility_samples.to_vec(),
        asset_prices: asset_price_samples.to_vec(),
        values,
    })
}

/// Build the call and put surfaces over the same axes.
pub fn price_surfaces<P: OptionPricer + ?Sized>(
    pricer: &P,
    volatility_samples: &[f64],
    asset_price_samples: &[f64],
) -> PricingResult<SurfacePair> {
    Ok(SurfacePair {
        call: price_surface(
            pricer,
            volatility_samples,
            asset_price_samples,
            OptionKind::Call,
        )?,
        put: price_surface(
            pricer,
            volatility_samples,
            asset_price_samples,
            OptionKind::Put,
        )?,
    })
}

/// Materialize both axes and build the call and put surfaces.
pub fn price_surfaces_on_axes<P: OptionPricer + ?Sized>(
    pricer: &P,
    volatility_axis: &SampleAxis,
    asset_price_axis: &SampleAxis,
) -> PricingResult<SurfacePair> {
    let vols = volatility_axis.samples(Axis::Volatility)?;
    let prices = asset_price_axis.samples(Axis::AssetPrice)?;
    price_surfaces(pricer, &vols, &prices)
}
