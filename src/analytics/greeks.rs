// src/analytics/greeks.rs
//! Analytical Black-Scholes Greeks
//!
//! All sensitivities are in model units: theta per year, vega per unit of σ,
//! rho per unit of r. Gamma and vega are the same for calls and puts.

use crate::analytics::bs_analytic::{d1_d2, OptionParameters};
use crate::error::{validation::*, BsmResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreeksResult {
    pub delta_call: f64,
    pub delta_put: f64,
    pub gamma: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    pub vega: f64,
    pub rho_call: f64,
    pub rho_put: f64,
}

impl GreeksResult {
    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("Delta (Call)", self.delta_call),
            ("Delta (Put)", self.delta_put),
            ("Gamma", self.gamma),
            ("Theta (Call)", self.theta_call),
            ("Theta (Put)", self.theta_put),
            ("Vega", self.vega),
            ("Rho (Call)", self.rho_call),
            ("Rho (Put)", self.rho_put),
        ]
    }
}

/// Black-Scholes Greeks for a call/put pair
///
/// # Formulas
/// ```text
/// Δc = Φ(d₁)                      Δp = Φ(d₁) - 1
/// Γ  = φ(d₁) / (S σ √T)
/// Θc = -S φ(d₁) σ / (2√T) - r K e^(-rT) Φ(d₂)
/// Θp = -S φ(d₁) σ / (2√T) + r K e^(-rT) Φ(-d₂)
/// ν  = S φ(d₁) √T
/// ρc = K T e^(-rT) Φ(d₂)          ρp = -K T e^(-rT) Φ(-d₂)
/// ```
///
/// # Errors
/// Same domain as [`d1_d2`]: `InvalidInput` for non-positive S, K, T, σ or
/// negative r.
pub fn greeks(params: &OptionParameters) -> BsmResult<GreeksResult> {
    let (d1, d2) = d1_d2(params)?;
    greeks_from(params, d1, d2)
}

/// Greeks from a d₁/d₂ pair the caller already holds (e.g. from a `PricePair`)
pub fn greeks_from(params: &OptionParameters, d1: f64, d2: f64) -> BsmResult<GreeksResult> {
    params.validate()?;
    let s = params.spot;
    let k = params.strike;
    let r = params.rate;
    let sigma = params.sigma;
    let sqrt_t = params.expiry.sqrt();
    let discounted_strike = k * params.discount();

    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);
    let decay = -s * pdf_d1 * sigma / (2.0 * sqrt_t);

    let result = GreeksResult {
        delta_call: cdf_d1,
        delta_put: cdf_d1 - 1.0,
        gamma: pdf_d1 / (s * sigma * sqrt_t),
        theta_call: decay - r * discounted_strike * norm_cdf(d2),
        theta_put: decay + r * discounted_strike * norm_cdf(-d2),
        vega: s * pdf_d1 * sqrt_t,
        rho_call: discounted_strike * params.expiry * norm_cdf(d2),
        rho_put: -discounted_strike * params.expiry * norm_cdf(-d2),
    };

    for (name, value) in result.rows() {
        ensure_finite("greeks", name, value)?;
    }
    debug!(?params, d1, d2, "computed greeks");
    Ok(result)
}
