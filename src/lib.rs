//! # bsm-calc: Black-Scholes Pricing, Greeks and Expiry P&L
//! 
//! A Rust library for the closed-form Black-Scholes-Merton model for a single
//! European option with constant volatility and risk-free rate.
//! 
//! ## Key Features
//! 
//! - **Closed-Form Pricing**: Call and put prices sharing one d₁/d₂ evaluation
//! - **Complete Greeks**: Delta, Gamma, Theta, Vega and Rho for both legs
//! - **Scenario P&L**: Payoff-at-expiry profit/loss over a grid of terminal prices
//! - **Accurate Normal CDF**: erfc-based, full precision in both tails
//! - **Fail Fast**: Invalid inputs return a typed error, never NaN
//! 
//! ## Quick Start
//! 
//! ```rust
//! use bsm_calc::analytics::bs_analytic::{price, OptionKind, OptionParameters};
//! use bsm_calc::analytics::greeks::greeks;
//! 
//! let params = OptionParameters {
//!     spot: 100.0,    // Spot price
//!     strike: 100.0,  // Strike price
//!     expiry: 1.0,    // Time to expiration (years)
//!     rate: 0.05,     // Risk-free rate
//!     sigma: 0.2,     // Volatility
//! };
//! 
//! let call = price(&params, OptionKind::Call).expect("Valid parameters");
//! let g = greeks(&params).expect("Valid parameters");
//! println!("Call: {:.4}, delta: {:.4}", call.price, g.delta_call);
//! ```
//! 
//! ## Mathematical Foundation
//! 
//! Prices follow from the risk-neutral expectation of the discounted payoff
//! under geometric Brownian motion, which has a closed form in terms of the
//! standard normal CDF Φ. The P&L generator deliberately does not revalue
//! the option: it shows the position's result if held to expiry.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod scenario;
pub mod valuation;
pub mod batch;
pub mod sampling;
pub mod output;
pub mod report;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::{OptionKind, OptionParameters, PricePair, PricingResult};
pub use analytics::greeks::GreeksResult;
pub use error::{BsmError, BsmResult};
pub use scenario::pnl::PnLCurve;
