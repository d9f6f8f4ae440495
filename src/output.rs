// src/output.rs
use crate::error::{BsmError, BsmResult};
use crate::scenario::pnl::PnLCurve;
use crate::valuation::Valuation;
use chrono::{SecondsFormat, Utc};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn write_pnl_to_csv(path: impl AsRef<Path>, curve: &PnLCurve) -> BsmResult<()> {
    let path = path.as_ref();
    write_pnl_rows(path, curve).map_err(|e| BsmError::io(path, e))?;
    info!(path = %path.display(), rows = curve.len(), "wrote P&L curve");
    Ok(())
}

fn write_pnl_rows(path: &Path, curve: &PnLCurve) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "stock_price,pnl_call,pnl_put")?;
    for (s, call, put) in curve.rows() {
        writeln!(file, "{},{},{}", s, call, put)?;
    }
    Ok(())
}

pub fn write_summary_to_csv(path: impl AsRef<Path>, summary: &[(&str, String)]) -> BsmResult<()> {
    let path = path.as_ref();
    let write = || -> io::Result<()> {
        let mut file = File::create(path)?;
        for (key, value) in summary {
            writeln!(file, "{},{}", key, value)?;
        }
        Ok(())
    };
    write().map_err(|e| BsmError::io(path, e))?;
    info!(path = %path.display(), rows = summary.len(), "wrote summary");
    Ok(())
}

/// Key/value rows describing a valuation, stamped with the generation time
pub fn valuation_summary(valuation: &Valuation) -> Vec<(&'static str, String)> {
    let p = &valuation.params;
    let mut rows = vec![
        (
            "generated_at",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        ("spot", p.spot.to_string()),
        ("strike", p.strike.to_string()),
        ("expiry", p.expiry.to_string()),
        ("rate", p.rate.to_string()),
        ("sigma", p.sigma.to_string()),
        ("d1", valuation.prices.d1.to_string()),
        ("d2", valuation.prices.d2.to_string()),
        ("call_price", valuation.prices.call.to_string()),
        ("put_price", valuation.prices.put.to_string()),
        ("premium", valuation.premium.to_string()),
    ];
    let g = &valuation.greeks;
    rows.extend([
        ("delta_call", g.delta_call.to_string()),
        ("delta_put", g.delta_put.to_string()),
        ("gamma", g.gamma.to_string()),
        ("theta_call", g.theta_call.to_string()),
        ("theta_put", g.theta_put.to_string()),
        ("vega", g.vega.to_string()),
        ("rho_call", g.rho_call.to_string()),
        ("rho_put", g.rho_put.to_string()),
    ]);
    rows
}

pub fn valuation_to_json(valuation: &Valuation) -> BsmResult<String> {
    serde_json::to_string_pretty(valuation).map_err(|e| BsmError::NumericalInstability {
        method: "valuation_to_json".to_string(),
        reason: e.to_string(),
    })
}
