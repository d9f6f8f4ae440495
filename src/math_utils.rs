// src/math_utils.rs
//! Standard normal distribution
//!
//! ```text
//! Φ(x) = ½ erfc(-x/√2)
//! φ(x) = (1/√(2π)) * exp(-x²/2)
//! ```
//!
//! The CDF goes through `erfc` rather than `1 + erf` so the left tail keeps
//! full relative precision instead of cancelling to zero around x ≈ -8.

use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
///
/// Exactly 0 at -∞ and 1 at +∞.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function φ(x)
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
