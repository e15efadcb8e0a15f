//! Black-Scholes pricing of European calls and puts.
//!
//! The engine fixes strike, maturity and rate at construction and takes
//! volatility and spot per call, so a whole grid can be priced from one
//! instance. Every input is validated and a result that would come out NaN or
//! infinite is returned as an error; use [`bs_price`] for the raw formula.

use tracing::debug;

use crate::error::{ensure_positive, PricingError, PricingResult};
use crate::model_params::ContractParameters;
use crate::models::traits::OptionPricer;
use crate::models::{OptionKind, PricePoint};

/// Standard normal cumulative distribution function.
///
/// Written through `erfc` so the lower tail keeps relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// The `(d1, d2)` pair of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Unchecked Black-Scholes price.
///
/// No validation is done: `sigma <= 0` or `T <= 0` make `sigma * sqrt(T)`
/// zero or NaN, and the result is then NaN or infinite. Non-positive `S`
/// or `K` produce NaN through the logarithm. Callers that cannot guarantee
/// their inputs should go through [`BlackScholes`].
#[allow(non_snake_case)]
pub fn bs_price(kind: OptionKind, S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    let df_strike = K * (-r * T).exp();
    match kind {
        OptionKind::Call => S * norm_cdf(d1) - df_strike * norm_cdf(d2),
        OptionKind::Put => df_strike * norm_cdf(-d2) - S * norm_cdf(-d1),
    }
}

/// Black-Scholes engine for one contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: ContractParameters,
}

impl BlackScholes {
    /// Build an engine, rejecting out-of-domain contract inputs.
    pub fn new(params: ContractParameters) -> PricingResult<Self> {
        params.validate()?;
        debug!(
            strike = params.strike,
            time_to_maturity = params.time_to_maturity,
            interest_rate = params.interest_rate,
            "black-scholes engine ready"
        );
        Ok(Self { params })
    }

    pub fn params(&self) -> &ContractParameters {
        &self.params
    }

    pub fn strike(&self) -> f64 {
        self.params.strike
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.params.time_to_maturity
    }

    pub fn interest_rate(&self) -> f64 {
        self.params.interest_rate
    }

    /// Price at the volatility and spot given at construction.
    pub fn default_price(&self, kind: OptionKind) -> PricingResult<f64> {
        self.price(self.params.volatility, self.params.current_price, kind)
    }

    /// Call and put at the volatility and spot given at construction.
    pub fn default_price_point(&self) -> PricingResult<PricePoint> {
        self.price_point(self.params.volatility, self.params.current_price)
    }

    pub fn call_price(&self, volatility: f64, current_price: f64) -> PricingResult<f64> {
        self.price(volatility, current_price, OptionKind::Call)
    }

    pub fn put_price(&self, volatility: f64, current_price: f64) -> PricingResult<f64> {
        self.price(volatility, current_price, OptionKind::Put)
    }
}

impl OptionPricer for BlackScholes {
    fn price(&self, volatility: f64, current_price: f64, kind: OptionKind) -> PricingResult<f64> {
        ensure_positive("volatility", volatility)?;
        ensure_positive("current_price", current_price)?;

        // Each input can be in range while the combination still degenerates
        let sig_sqrt_t = volatility * self.params.time_to_maturity.sqrt();
        if sig_sqrt_t <= 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                volatility,
                "volatility * sqrt(time_to_maturity) underflows to zero",
            ));
        }
        let df_strike = self.params.discounted_strike();
        if !df_strike.is_finite() {
            return Err(PricingError::invalid(
                "interest_rate",
                self.params.interest_rate,
                "discounted strike overflows",
            ));
        }

        let price = bs_price(
            kind,
            current_price,
            self.params.strike,
            self.params.interest_rate,
            self.params.time_to_maturity,
            volatility,
        );
        if !price.is_finite() {
            return Err(PricingError::invalid(
                "current_price",
                current_price,
                "model price is not finite",
            ));
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_one_year() -> BlackScholes {
        BlackScholes::new(ContractParameters::new(1.0, 100.0, 0.05, 0.2, 100.0)).unwrap()
    }

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_eq!(norm_cdf(0.0), 0.5);
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
        assert!((norm_cdf(-1.96) - 0.024_997_895_148_220).abs() < 1e-12);
        // Deep lower tail must not collapse to zero
        assert!(norm_cdf(-30.0) > 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_reference_prices() {
        let engine = atm_one_year();
        let point = engine.default_price_point().unwrap();
        assert!((point.call - 10.450_583_572_185_565).abs() < 1e-9);
        assert!((point.put - 5.573_526_022_256_971).abs() < 1e-9);
    }

    #[test]
    fn test_call_and_put_share_one_engine() {
        let engine = atm_one_year();
        let call = engine.call_price(0.25, 110.0).unwrap();
        let put = engine.put_price(0.25, 110.0).unwrap();
        let parity = 110.0 - engine.params().discounted_strike();
        assert!((call - put - parity).abs() < 1e-9);
    }

    #[test]
    fn test_per_call_inputs_are_validated() {
        let engine = atm_one_year();
        assert!(matches!(
            engine.price(0.0, 100.0, OptionKind::Call),
            Err(PricingError::InvalidParameter { name: "volatility", .. })
        ));
        assert!(matches!(
            engine.price(0.2, -5.0, OptionKind::Put),
            Err(PricingError::InvalidParameter { name: "current_price", .. })
        ));
    }

    #[test]
    fn test_construction_rejects_zero_maturity() {
        let params = ContractParameters::new(0.0, 100.0, 0.05, 0.2, 100.0);
        assert!(BlackScholes::new(params).is_err());
    }

    #[test]
    fn test_discounted_strike_overflow_rejected() {
        // exp(0.05 * 1e5) overflows f64
        let params = ContractParameters::new(1e5, 100.0, -0.05, 0.2, 100.0);
        let engine = BlackScholes::new(params).unwrap();
        for kind in OptionKind::ALL {
            assert!(matches!(
                engine.default_price(kind),
                Err(PricingError::InvalidParameter { name: "interest_rate", .. })
            ));
        }
    }

    #[test]
    fn test_vanishing_sigma_sqrt_t_rejected() {
        let params = ContractParameters::new(1e-300, 100.0, 0.0, 1e-300, 100.0);
        let engine = BlackScholes::new(params).unwrap();
        assert!(matches!(
            engine.default_price_point(),
            Err(PricingError::InvalidParameter { name: "volatility", .. })
        ));
    }

    #[test]
    fn test_raw_formula_propagates_nan() {
        let price = bs_price(OptionKind::Call, 100.0, 100.0, 0.05, 0.0, 0.2);
        assert!(price.is_nan());
        // At the money with zero rate, sigma = 0 gives 0 / 0 in d1
        let price = bs_price(OptionKind::Put, 100.0, 100.0, 0.0, 1.0, 0.0);
        assert!(price.is_nan());
    }
}
