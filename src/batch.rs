// src/batch.rs
//! Parallel evaluation of independent parameter sets
//!
//! Every element is priced on its own; an invalid set yields an `Err` in its
//! slot without affecting its neighbours. Output order equals input order.

use crate::analytics::bs_analytic::{price_pair, OptionParameters, PricePair};
use crate::analytics::greeks::{greeks_from, GreeksResult};
use crate::error::BsmResult;
use rayon::prelude::*;
use tracing::debug;

/// Call/put prices for each parameter set
pub fn price_batch(params: &[OptionParameters]) -> Vec<BsmResult<PricePair>> {
    debug!(count = params.len(), "pricing batch");
    params.par_iter().map(price_pair).collect()
}

/// Prices and Greeks for each parameter set, sharing d₁/d₂ per element
pub fn greeks_batch(params: &[OptionParameters]) -> Vec<BsmResult<(PricePair, GreeksResult)>> {
    debug!(count = params.len(), "computing greeks batch");
    params
        .par_iter()
        .map(|p| {
            let pair = price_pair(p)?;
            let greeks = greeks_from(p, pair.d1, pair.d2)?;
            Ok((pair, greeks))
        })
        .collect()
}

/// Serial counterpart of [`price_batch`], used as the benchmark baseline
pub fn price_batch_serial(params: &[OptionParameters]) -> Vec<BsmResult<PricePair>> {
    params.iter().map(price_pair).collect()
}
