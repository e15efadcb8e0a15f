//! # bsm-surface: Black-Scholes Option Prices and Price Surfaces
//!
//! `bsm-surface` prices European calls and puts with the Black-Scholes closed
//! form and evaluates that price over a grid of (volatility, asset price)
//! pairs, producing the matrices behind a 3-D price surface.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: validated [`BlackScholes`] engine plus the raw
//!   [`bs_price`] formula
//! - **Price surfaces**: exact per-cell evaluation over any two sample axes
//! - **Configuration**: TOML-backed [`SurfaceConfig`] with dashboard defaults
//! - **Export**: CSV output of surfaces for external plotting
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_surface::{price_contract, build_surfaces, default_configs, ContractParameters};
//!
//! let params = ContractParameters::new(1.0, 100.0, 0.05, 0.2, 100.0);
//! let point = price_contract(&params)?;
//! assert!((point.call - 10.4506).abs() < 1e-4);
//!
//! let surfaces = build_surfaces(&default_configs::standard())?;
//! assert_eq!(surfaces.call.rows(), 50);
//! assert_eq!(surfaces.call.cols(), 10);
//! # Ok::<(), bsm_surface::PricingError>(())
//! ```
//!
//! ## Numerical Domain
//!
//! Strike, time to maturity, volatility and current price must be finite and
//! strictly positive; the rate may be any finite number. Inputs outside that
//! domain are rejected with [`PricingError::InvalidParameter`] rather than
//! producing NaN or infinite prices.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod model_params;
pub mod models;
pub mod report;
pub mod surface;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::traits::OptionPricer;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::SurfaceConfig;
pub use error::{Axis, PricingError, PricingResult};
pub use model_params::ContractParameters;
pub use models::bs::{bs_price, norm_cdf, BlackScholes};
pub use models::{OptionKind, PricePoint};
pub use report::PricingReport;
pub use surface::{
    linspace, price_surface, price_surfaces, price_surfaces_on_axes, PriceSurface, SampleAxis,
    SurfacePair, ASSET_PRICE_SAMPLES, VOLATILITY_SAMPLES,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surface layouts.
///
/// - [`standard()`]: the dashboard grid, 10 volatilities by 50 asset prices
/// - [`high_resolution()`]: 40 by 200, for smooth rendering
/// - [`minimal()`]: 2 by 2 over the axis extremes
pub mod default_configs {
    use crate::config::SurfaceConfig;

    /// Dashboard defaults.
    ///
    /// Contract `S = 100, K = 100, T = 1, σ = 0.2, r = 0.05`; volatility axis
    /// `0.01..=1.0` with 10 samples; asset price axis `0.1..=200` with 50
    /// samples.
    pub fn standard() -> SurfaceConfig {
        SurfaceConfig::standard()
    }

    /// Same contract and ranges as [`standard()`] on a 40 × 200 grid.
    pub fn high_resolution() -> SurfaceConfig {
        SurfaceConfig::high_resolution()
    }

    /// Same contract and ranges as [`standard()`] sampled only at the ends.
    pub fn minimal() -> SurfaceConfig {
        SurfaceConfig::minimal()
    }
}

/// Price both kinds of a contract at its own volatility and spot.
pub fn price_contract(params: &ContractParameters) -> PricingResult<PricePoint> {
    BlackScholes::new(*params)?.default_price_point()
}

/// Price one kind of a contract at its own volatility and spot.
pub fn price_option(params: &ContractParameters, kind: OptionKind) -> PricingResult<f64> {
    let engine = BlackScholes::new(*params)?;
    engine.price(params.volatility, params.current_price, kind)
}

/// Build call and put surfaces for a configuration.
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] for an out-of-domain contract or a
///   non-positive axis sample
/// * [`PricingError::DegenerateGrid`] for an axis with zero samples
pub fn build_surfaces(config: &SurfaceConfig) -> PricingResult<SurfacePair> {
    config.validate()?;
    let engine = BlackScholes::new(config.contract)?;
    price_surfaces_on_axes(&engine, &config.volatility_axis, &config.asset_price_axis)
}
