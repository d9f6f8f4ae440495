// src/scenario/grid.rs
//! Evenly spaced terminal-price grids for P&L scenarios

use crate::error::{validation::*, BsmError, BsmResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Grid spanning `[lower_ratio * S, upper_ratio * S]` with `points` nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub lower_ratio: f64,
    pub upper_ratio: f64,
    pub points: usize,
}

impl GridSpec {
    pub fn validate(&self) -> BsmResult<()> {
        validate_positive("lower_ratio", self.lower_ratio)?;
        validate_positive("upper_ratio", self.upper_ratio)?;
        if self.lower_ratio >= self.upper_ratio {
            return Err(BsmError::InvalidConfiguration {
                field: "grid".to_string(),
                reason: format!(
                    "lower ratio {} must be below upper ratio {}",
                    self.lower_ratio, self.upper_ratio
                ),
            });
        }
        if self.points < 2 {
            return Err(BsmError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "need at least 2 grid points".to_string(),
            });
        }
        if self.points > 1_000_000 {
            return Err(BsmError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "exceeds maximum allowed (1,000,000)".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            lower_ratio: 0.5,
            upper_ratio: 1.5,
            points: 10,
        }
    }
}

/// `linspace(lower * spot, upper * spot, points)`, ascending, endpoints included
pub fn price_grid(spot: f64, spec: &GridSpec) -> BsmResult<Vec<f64>> {
    validate_positive("spot", spot)?;
    spec.validate()?;
    let grid = Array1::linspace(spec.lower_ratio * spot, spec.upper_ratio * spot, spec.points);
    Ok(grid.to_vec())
}
