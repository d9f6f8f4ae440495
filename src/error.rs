// src/error.rs
use std::fmt;

/// Error types for the bsm-calc library
#[derive(Debug, Clone, PartialEq)]
pub enum BsmError {
    /// Input outside the domain of the closed-form model
    InvalidInput {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Option kind that is neither a call nor a put
    InvalidOptionKind { kind: String },

    /// Invalid configuration (grid, report options)
    InvalidConfiguration { field: String, reason: String },

    /// A formula produced a non-finite value from valid inputs
    NumericalInstability { method: String, reason: String },

    /// Report file could not be written
    Io { path: String, reason: String },
}

impl fmt::Display for BsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BsmError::InvalidInput {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid input '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            BsmError::InvalidOptionKind { kind } => {
                write!(f, "Invalid option kind '{}': expected 'call' or 'put'", kind)
            }
            BsmError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            BsmError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
            BsmError::Io { path, reason } => {
                write!(f, "Failed to write '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for BsmError {}

impl BsmError {
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        BsmError::Io {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for bsm-calc operations
pub type BsmResult<T> = Result<T, BsmError>;

/// Validation utilities
pub mod validation {
    use super::{BsmError, BsmResult};

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> BsmResult<()> {
        if !value.is_finite() {
            Err(BsmError::InvalidInput {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and positive
    pub fn validate_positive(name: &str, value: f64) -> BsmResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(BsmError::InvalidInput {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> BsmResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(BsmError::InvalidInput {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Guard a computed output against NaN/∞ leaking to the caller
    pub fn ensure_finite(method: &str, name: &str, value: f64) -> BsmResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(BsmError::NumericalInstability {
                method: method.to_string(),
                reason: format!("{} evaluated to {}", name, value),
            })
        }
    }
}
