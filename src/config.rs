use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Axis, PricingResult};
use crate::model_params::ContractParameters;
use crate::surface::SampleAxis;

/// Everything needed to price one contract and draw its two surfaces.
///
/// Deserializes from TOML; any missing table or field falls back to the
/// dashboard defaults:
///
/// ```toml
/// [contract]
/// current_price = 100.0
/// strike = 100.0
/// time_to_maturity = 1.0
/// volatility = 0.2
/// interest_rate = 0.05
///
/// [volatility_axis]
/// min = 0.01
/// max = 1.0
/// count = 10
///
/// [asset_price_axis]
/// min = 0.1
/// max = 200.0
/// count = 50
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub contract: ContractParameters,

    /// Volatility samples (surface x axis)
    #[serde(default = "default_volatility_axis")]
    pub volatility_axis: SampleAxis,

    /// Asset price samples (surface y axis)
    #[serde(default = "default_asset_price_axis")]
    pub asset_price_axis: SampleAxis,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl SurfaceConfig {
    /// Dashboard layout: 10 volatility samples by 50 asset price samples.
    pub fn standard() -> Self {
        Self {
            contract: ContractParameters::default(),
            volatility_axis: default_volatility_axis(),
            asset_price_axis: default_asset_price_axis(),
        }
    }

    /// Dense grid for smooth rendering
    pub fn high_resolution() -> Self {
        Self {
            volatility_axis: SampleAxis::new(0.01, 1.0, 40),
            asset_price_axis: SampleAxis::new(0.1, 200.0, 200),
            ..Self::standard()
        }
    }

    /// Two-by-two grid spanning the axis extremes, for quick checks
    pub fn minimal() -> Self {
        Self {
            volatility_axis: SampleAxis::new(0.01, 1.0, 2),
            asset_price_axis: SampleAxis::new(0.1, 200.0, 2),
            ..Self::standard()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SurfaceConfig = toml::from_str(s).context("parsing surface config")?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading surface config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing surface config")
    }

    /// Validate the contract and both axes.
    pub fn validate(&self) -> PricingResult<()> {
        let result = self
            .contract
            .validate()
            .and_then(|_| self.volatility_axis.validate(Axis::Volatility))
            .and_then(|_| self.asset_price_axis.validate(Axis::AssetPrice));
        if let Err(ref e) = result {
            warn!(error = %e, "surface config rejected");
        }
        result
    }
}

fn default_volatility_axis() -> SampleAxis {
    SampleAxis::volatility(0.01, 1.0)
}

fn default_asset_price_axis() -> SampleAxis {
    SampleAxis::asset_price(0.1, 200.0)
}
