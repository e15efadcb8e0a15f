pub mod bs;

use serde::{Deserialize, Serialize};

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub const ALL: [OptionKind; 2] = [OptionKind::Call, OptionKind::Put];

    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Call and put value for one (volatility, asset price) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub call: f64,
    pub put: f64,
}

impl PricePoint {
    pub fn get(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call,
            OptionKind::Put => self.put,
        }
    }
}

/// Common traits used by pricing models
pub mod traits {
    use super::{OptionKind, PricePoint};
    use crate::error::PricingResult;

    /// A model that prices an option once volatility and spot are supplied,
    /// with every other contract term fixed inside the model.
    pub trait OptionPricer {
        fn price(&self, volatility: f64, current_price: f64, kind: OptionKind)
            -> PricingResult<f64>;

        fn price_point(&self, volatility: f64, current_price: f64) -> PricingResult<PricePoint> {
            Ok(PricePoint {
                call: self.price(volatility, current_price, OptionKind::Call)?,
                put: self.price(volatility, current_price, OptionKind::Put)?,
            })
        }
    }
}
