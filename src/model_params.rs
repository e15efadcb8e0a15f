//! Contract inputs for the Black-Scholes engine.
//!
//! [`ContractParameters`] is the record handed over by whatever front end
//! collects the five scalar inputs. It is plain data: validation happens when
//! an engine is built from it, so a config file can be deserialized first and
//! checked afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, PricingResult};

/// The five scalar inputs of a European option contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractParameters {
    /// Remaining contract life in years (> 0)
    #[serde(default = "default_time_to_maturity")]
    pub time_to_maturity: f64,
    /// Exercise price (> 0)
    #[serde(default = "default_strike")]
    pub strike: f64,
    /// Annualized continuously compounded risk-free rate
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
    /// Annualized volatility of log-returns (> 0)
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// Current price of the underlying (> 0)
    #[serde(default = "default_current_price")]
    pub current_price: f64,
}

impl Default for ContractParameters {
    fn default() -> Self {
        Self {
            time_to_maturity: default_time_to_maturity(),
            strike: default_strike(),
            interest_rate: default_interest_rate(),
            volatility: default_volatility(),
            current_price: default_current_price(),
        }
    }
}

impl ContractParameters {
    pub fn new(
        time_to_maturity: f64,
        strike: f64,
        interest_rate: f64,
        volatility: f64,
        current_price: f64,
    ) -> Self {
        Self {
            time_to_maturity,
            strike,
            interest_rate,
            volatility,
            current_price,
        }
    }

    /// Check every field against its domain.
    ///
    /// Strike, maturity, volatility and current price must be finite and
    /// strictly positive. The rate may be any finite value, including
    /// negative rates.
    pub fn validate(&self) -> PricingResult<()> {
        ensure_positive("time_to_maturity", self.time_to_maturity)?;
        ensure_positive("strike", self.strike)?;
        ensure_finite("interest_rate", self.interest_rate)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_positive("current_price", self.current_price)?;
        Ok(())
    }

    /// Present value of the strike, `K * exp(-r * T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.interest_rate * self.time_to_maturity).exp()
    }

    /// Labelled input rows with values rounded to two decimals, in display order.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Current Asset Price", format!("{:.2}", self.current_price)),
            ("Strike Price", format!("{:.2}", self.strike)),
            ("Time to Maturity", format!("{:.2}", self.time_to_maturity)),
            ("Volatility", format!("{:.2}", self.volatility)),
            ("Interest Rate", format!("{:.2}", self.interest_rate)),
        ]
    }
}

fn default_time_to_maturity() -> f64 {
    1.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_interest_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_current_price() -> f64 {
    100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    #[test]
    fn test_defaults_are_valid() {
        let params = ContractParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.strike, 100.0);
        assert_eq!(params.current_price, 100.0);
    }

    #[test]
    fn test_validation_rejects_out_of_domain_inputs() {
        let base = ContractParameters::default();

        let bad = ContractParameters { strike: 0.0, ..base };
        assert!(matches!(
            bad.validate(),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));

        let bad = ContractParameters { time_to_maturity: -1.0, ..base };
        assert!(bad.validate().is_err());

        let bad = ContractParameters { volatility: f64::NAN, ..base };
        assert!(bad.validate().is_err());

        let bad = ContractParameters { current_price: f64::INFINITY, ..base };
        assert!(bad.validate().is_err());

        // Negative rates are legitimate
        let ok = ContractParameters { interest_rate: -0.01, ..base };
        assert!(ok.validate().is_ok());

        let bad = ContractParameters { interest_rate: f64::NAN, ..base };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_summary_rows_rounding() {
        let params = ContractParameters::new(0.5, 101.256, 0.0449, 0.3333, 99.999);
        let rows = params.summary_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("Current Asset Price", "100.00".to_string()));
        assert_eq!(rows[1], ("Strike Price", "101.26".to_string()));
        assert_eq!(rows[2], ("Time to Maturity", "0.50".to_string()));
        assert_eq!(rows[3], ("Volatility", "0.33".to_string()));
        assert_eq!(rows[4], ("Interest Rate", "0.04".to_string()));
    }
}
