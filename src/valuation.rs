// src/valuation.rs
//! One-shot evaluation of everything a calculator screen shows
//!
//! Call and put prices, the Greeks and the expiry P&L curve are produced from
//! a single d₁/d₂ evaluation. When no premium is given the call price is used,
//! so the default P&L view answers "what if I pay fair value for the call".

use crate::analytics::bs_analytic::{price_pair, OptionParameters, PricePair};
use crate::analytics::greeks::{greeks_from, GreeksResult};
use crate::error::{validation::*, BsmResult};
use crate::scenario::grid::{price_grid, GridSpec};
use crate::scenario::pnl::{pnl_curve, PnLCurve};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub params: OptionParameters,
    pub grid: GridSpec,
    /// Premium paid for the position; `None` uses the call price
    pub premium: Option<f64>,
}

impl CalculatorConfig {
    pub fn validate(&self) -> BsmResult<()> {
        self.params.validate()?;
        self.grid.validate()?;
        if let Some(premium) = self.premium {
            validate_finite("premium", premium)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub params: OptionParameters,
    pub prices: PricePair,
    pub greeks: GreeksResult,
    pub premium: f64,
    pub pnl: PnLCurve,
}

impl Valuation {
    /// 2×N P&L matrix, row 0 call and row 1 put, columns follow the grid
    pub fn heatmap(&self) -> Array2<f64> {
        let n = self.pnl.len();
        let mut matrix = Array2::zeros((2, n));
        for (j, (_, call, put)) in self.pnl.rows().enumerate() {
            matrix[[0, j]] = call;
            matrix[[1, j]] = put;
        }
        matrix
    }

    /// Symmetric colour bound: the heatmap spans [-bound, bound]
    pub fn heatmap_bound(&self) -> f64 {
        self.pnl.max_abs()
    }
}

pub fn evaluate(config: &CalculatorConfig) -> BsmResult<Valuation> {
    config.validate()?;
    let params = config.params;

    let prices = price_pair(&params)?;
    let greeks = greeks_from(&params, prices.d1, prices.d2)?;
    let premium = config.premium.unwrap_or(prices.call);

    let grid = price_grid(params.spot, &config.grid)?;
    let pnl = pnl_curve(&grid, params.strike, premium)?;

    debug!(premium, points = pnl.len(), "built expiry P&L curve");
    info!(
        call = prices.call,
        put = prices.put,
        "valuation complete"
    );

    Ok(Valuation {
        params,
        prices,
        greeks,
        premium,
        pnl,
    })
}
