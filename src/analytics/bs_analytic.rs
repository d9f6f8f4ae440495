// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x). Both legs and every
//! Greek are functions of the same two statistics d₁ and d₂, so they are
//! computed once per evaluation and handed around.

use crate::error::{validation::*, BsmError, BsmResult};
use crate::math_utils::norm_cdf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Below this σ√T the distribution of ln(S_T) is essentially a point mass
const DEGENERATE_VOL_TIME: f64 = 1e-6;

/// Call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Intrinsic value max(S - K, 0) or max(K - S, 0)
    pub fn intrinsic(&self, s: f64, k: f64) -> f64 {
        match self {
            OptionKind::Call => (s - k).max(0.0),
            OptionKind::Put => (k - s).max(0.0),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => f.pad("call"),
            OptionKind::Put => f.pad("put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = BsmError;

    fn from_str(raw: &str) -> BsmResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(BsmError::InvalidOptionKind {
                kind: raw.to_string(),
            }),
        }
    }
}

/// Inputs of the closed-form model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    pub spot: f64,   // S: current price of the underlying
    pub strike: f64, // K
    pub expiry: f64, // T: years to expiry
    pub rate: f64,   // r: continuously compounded
    pub sigma: f64,  // σ: annualised volatility
}

impl OptionParameters {
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, sigma: f64) -> Self {
        OptionParameters {
            spot,
            strike,
            expiry,
            rate,
            sigma,
        }
    }

    /// Validate that d₁ is defined and the inputs are inside the model's domain
    pub fn validate(&self) -> BsmResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_positive("expiry", self.expiry)?;
        validate_non_negative("rate", self.rate)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// Discount factor e^(-rT)
    pub fn discount(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        OptionParameters {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            sigma: 0.2,
        }
    }
}

/// Price of one leg together with the d₁/d₂ it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// Call and put prices sharing a single d₁/d₂ evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePair {
    pub call: f64,
    pub put: f64,
    pub d1: f64,
    pub d2: f64,
}

impl PricePair {
    pub fn get(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call,
            OptionKind::Put => self.put,
        }
    }
}

/// Black-Scholes d₁ and d₂
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Errors
/// `InvalidInput` when S, K, T or σ is not positive, r is negative, or any
/// input is NaN/∞.
pub fn d1_d2(params: &OptionParameters) -> BsmResult<(f64, f64)> {
    params.validate()?;
    let OptionParameters {
        spot: s,
        strike: k,
        expiry: t,
        rate: r,
        sigma,
    } = *params;

    let vol_sqrt_t = sigma * t.sqrt();
    if vol_sqrt_t < DEGENERATE_VOL_TIME {
        warn!(
            sigma,
            expiry = t,
            "σ√T = {:e} is tiny; price collapses to discounted intrinsic value",
            vol_sqrt_t
        );
    }

    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    Ok((
        ensure_finite("d1_d2", "d1", d1)?,
        ensure_finite("d1_d2", "d2", d2)?,
    ))
}

fn call_from(params: &OptionParameters, d1: f64, d2: f64) -> f64 {
    params.spot * norm_cdf(d1) - params.strike * params.discount() * norm_cdf(d2)
}

fn put_from(params: &OptionParameters, d1: f64, d2: f64) -> f64 {
    params.strike * params.discount() * norm_cdf(-d2) - params.spot * norm_cdf(-d1)
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Returns the price of the requested leg plus the d₁/d₂ it used, so a
/// caller can feed them to [`crate::analytics::greeks::greeks_from`].
pub fn price(params: &OptionParameters, kind: OptionKind) -> BsmResult<PricingResult> {
    let (d1, d2) = d1_d2(params)?;
    let raw = match kind {
        OptionKind::Call => call_from(params, d1, d2),
        OptionKind::Put => put_from(params, d1, d2),
    };
    let price = ensure_finite("price", "price", raw)?;
    debug!(?params, %kind, price, d1, d2, "priced option");
    Ok(PricingResult { price, d1, d2 })
}

/// Both legs from one d₁/d₂ evaluation
pub fn price_pair(params: &OptionParameters) -> BsmResult<PricePair> {
    let (d1, d2) = d1_d2(params)?;
    let call = ensure_finite("price_pair", "call", call_from(params, d1, d2))?;
    let put = ensure_finite("price_pair", "put", put_from(params, d1, d2))?;
    debug!(?params, call, put, d1, d2, "priced call/put pair");
    Ok(PricePair { call, put, d1, d2 })
}
