// src/report.rs
//! Plain-text rendering of a [`Valuation`] for terminal display

use crate::analytics::bs_analytic::OptionKind;
use crate::error::{BsmError, BsmResult};
use crate::valuation::Valuation;
use bitflags::bitflags;
use std::fmt::Write;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReportSections: u32 {
        const NONE   = 0;
        const PRICES = 1 << 0;
        const GREEKS = 1 << 1;
        const PNL    = 1 << 2;
    }
}

impl ReportSections {
    /// Parse a comma separated list such as `prices,pnl`
    pub fn parse_list(raw: &str) -> BsmResult<Self> {
        let mut sections = ReportSections::NONE;
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            sections |= match name.to_ascii_lowercase().as_str() {
                "prices" => ReportSections::PRICES,
                "greeks" => ReportSections::GREEKS,
                "pnl" => ReportSections::PNL,
                "all" => ReportSections::all(),
                other => {
                    return Err(BsmError::InvalidConfiguration {
                        field: "only".to_string(),
                        reason: format!("unknown report section '{}'", other),
                    })
                }
            };
        }
        if sections.is_empty() {
            return Err(BsmError::InvalidConfiguration {
                field: "only".to_string(),
                reason: "no report sections selected".to_string(),
            });
        }
        Ok(sections)
    }
}

impl Default for ReportSections {
    fn default() -> Self {
        ReportSections::all()
    }
}

/// Render the selected sections; `kind` restricts the price section to one leg
pub fn render_text(
    valuation: &Valuation,
    sections: ReportSections,
    kind: Option<OptionKind>,
) -> String {
    let mut out = String::new();
    let p = &valuation.params;

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "S = {:.2}  K = {:.2}  T = {:.4}  r = {:.4}  σ = {:.4}",
        p.spot, p.strike, p.expiry, p.rate, p.sigma
    );

    if sections.contains(ReportSections::PRICES) {
        let _ = writeln!(out, "\n--- Prices ---");
        match kind {
            Some(kind) => {
                let _ = writeln!(out, "{:<6} ${:.2}", kind, valuation.prices.get(kind));
            }
            None => {
                let _ = writeln!(out, "Call: ${:.2}    Put: ${:.2}", valuation.prices.call, valuation.prices.put);
            }
        }
        let _ = writeln!(out, "d1 = {:.6}  d2 = {:.6}", valuation.prices.d1, valuation.prices.d2);
    }

    if sections.contains(ReportSections::GREEKS) {
        let _ = writeln!(out, "\n--- Greeks ---");
        for (label, value) in valuation.greeks.rows() {
            let _ = writeln!(out, "{:<14}{:>12.4}", label, value);
        }
    }

    if sections.contains(ReportSections::PNL) {
        let _ = writeln!(
            out,
            "\n--- P&L at expiry (premium ${:.2}, bound ±{:.2}) ---",
            valuation.premium,
            valuation.heatmap_bound()
        );
        let _ = writeln!(out, "{:>12}{:>12}{:>12}", "Stock", "Call", "Put");
        for (s, call, put) in valuation.pnl.rows() {
            let _ = writeln!(out, "{:>12.2}{:>12.2}{:>12.2}", s, call, put);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::{evaluate, CalculatorConfig};

    #[test]
    fn test_parse_list() {
        assert_eq!(
            ReportSections::parse_list("prices, pnl").unwrap(),
            ReportSections::PRICES | ReportSections::PNL
        );
        assert_eq!(ReportSections::parse_list("all").unwrap(), ReportSections::all());
        assert!(ReportSections::parse_list("gamma").is_err());
        assert!(ReportSections::parse_list(" , ").is_err());
    }

    #[test]
    fn test_render_selected_sections() {
        let valuation = evaluate(&CalculatorConfig::default()).unwrap();

        let full = render_text(&valuation, ReportSections::default(), None);
        assert!(full.contains("Call: $10.45"));
        assert!(full.contains("Put: $5.57"));
        assert!(full.contains("Vega"));
        assert!(full.contains("P&L at expiry"));

        let prices_only = render_text(&valuation, ReportSections::PRICES, Some(OptionKind::Put));
        assert!(prices_only.contains("put    $5.57"));
        assert!(!prices_only.contains("Greeks"));
        assert!(!prices_only.contains("P&L"));
    }
}
