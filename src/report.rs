//! Everything a front end needs to render one pricing request: the input
//! table, the two headline prices and the call and put surfaces.

use crate::config::SurfaceConfig;
use crate::error::PricingResult;
use crate::models::bs::BlackScholes;
use crate::models::{OptionKind, PricePoint};
use crate::surface::{price_surfaces_on_axes, SurfacePair};

#[derive(Debug, Clone, PartialEq)]
pub struct PricingReport {
    /// Labelled input values, rounded to two decimals
    pub inputs: Vec<(&'static str, String)>,
    /// Call and put at the configured volatility and spot
    pub prices: PricePoint,
    pub surfaces: SurfacePair,
}

impl PricingReport {
    pub fn build(config: &SurfaceConfig) -> PricingResult<Self> {
        config.validate()?;
        let engine = BlackScholes::new(config.contract)?;
        let prices = engine.default_price_point()?;
        let surfaces =
            price_surfaces_on_axes(&engine, &config.volatility_axis, &config.asset_price_axis)?;

        Ok(Self {
            inputs: config.contract.summary_rows(),
            prices,
            surfaces,
        })
    }

    /// Headline price formatted for display, e.g. `$10.45`.
    pub fn display_price(&self, kind: OptionKind) -> String {
        format_price(self.prices.get(kind))
    }

    pub fn call_display(&self) -> String {
        self.display_price(OptionKind::Call)
    }

    pub fn put_display(&self) -> String {
        self.display_price(OptionKind::Put)
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_report() {
        let report = PricingReport::build(&SurfaceConfig::standard()).unwrap();
        assert_eq!(report.call_display(), "$10.45");
        assert_eq!(report.put_display(), "$5.57");
        assert_eq!(report.inputs.len(), 5);
        assert_eq!(report.surfaces.call.rows(), 50);
        assert_eq!(report.surfaces.call.cols(), 10);
        assert_eq!(report.surfaces.put.rows(), 50);
    }

    #[test]
    fn test_invalid_contract_yields_no_report() {
        let mut config = SurfaceConfig::standard();
        config.contract.volatility = 0.0;
        assert!(PricingReport::build(&config).is_err());
    }
}
