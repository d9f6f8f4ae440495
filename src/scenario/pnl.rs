// src/scenario/pnl.rs
//! Profit and loss at expiry
//!
//! # Mathematical Definitions
//!
//! For a long position bought for `premium` and held to expiry:
//! - **Call**: max(S_T - K, 0) - premium
//! - **Put**: max(K - S_T, 0) - premium
//!
//! This is the payoff diagram, not a Black-Scholes revaluation: the
//! remaining time value is ignored. A negative premium is a net credit.
//!
//! # Implementation Notes
//!
//! The curve is evaluated on whatever sequence of terminal prices the caller
//! hands in; output order mirrors input order and no spacing is assumed.

use crate::analytics::bs_analytic::OptionKind;
use crate::error::{validation::*, BsmResult};
use serde::Serialize;

/// Call and put P&L over a set of hypothetical terminal prices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnLCurve {
    pub stock_prices: Vec<f64>,
    pub pnl_call: Vec<f64>,
    pub pnl_put: Vec<f64>,
}

impl PnLCurve {
    pub fn len(&self) -> usize {
        self.stock_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock_prices.is_empty()
    }

    pub fn leg(&self, kind: OptionKind) -> &[f64] {
        match kind {
            OptionKind::Call => &self.pnl_call,
            OptionKind::Put => &self.pnl_put,
        }
    }

    /// (stock price, call P&L, put P&L) rows in input order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.stock_prices
            .iter()
            .zip(self.pnl_call.iter().zip(self.pnl_put.iter()))
            .map(|(&s, (&c, &p))| (s, c, p))
    }

    /// Largest absolute P&L on either leg, 0 for an empty curve
    pub fn max_abs(&self) -> f64 {
        self.pnl_call
            .iter()
            .chain(self.pnl_put.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

/// P&L of one long option at expiry for a single terminal price
pub fn expiry_pnl(kind: OptionKind, s: f64, strike: f64, premium: f64) -> f64 {
    kind.intrinsic(s, strike) - premium
}

/// Build the call and put P&L curves over `price_range`
///
/// # Errors
/// `InvalidInput` when `strike` is not positive or `premium` / any price is
/// not finite.
pub fn pnl_curve(price_range: &[f64], strike: f64, premium: f64) -> BsmResult<PnLCurve> {
    validate_positive("strike", strike)?;
    validate_finite("premium", premium)?;
    for &s in price_range {
        validate_finite("stock_price", s)?;
    }

    let pnl_call = price_range
        .iter()
        .map(|&s| expiry_pnl(OptionKind::Call, s, strike, premium))
        .collect();
    let pnl_put = price_range
        .iter()
        .map(|&s| expiry_pnl(OptionKind::Put, s, strike, premium))
        .collect();

    Ok(PnLCurve {
        stock_prices: price_range.to_vec(),
        pnl_call,
        pnl_put,
    })
}
