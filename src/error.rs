//! Error types for the Ohmnet resistor network calculator.
//!
//! This module provides a unified error type [`OhmnetError`] that covers
//! all error conditions that can occur during network construction and
//! equivalent-resistance evaluation.

use thiserror::Error;

/// Result type alias using [`OhmnetError`].
pub type Result<T> = std::result::Result<T, OhmnetError>;

/// Unified error type for all Ohmnet operations.
#[derive(Error, Debug)]
pub enum OhmnetError {
    // ============ Construction Errors ============
    /// Non-positive or non-finite resistance supplied to a resistor
    #[error("Invalid resistance value {value} - resistance must be a strictly positive, finite number of ohms")]
    InvalidValue { value: f64 },

    // ============ Evaluation Errors ============
    /// Equivalent resistance is undefined for the circuit as built
    #[error("Degenerate circuit: {message}")]
    DegenerateCircuit { message: String },

    /// A composite circuit transitively contains itself
    #[error("Cyclic composition - a composite circuit transitively contains itself, so equivalent-resistance evaluation would not terminate")]
    CyclicComposition,
}

impl OhmnetError {
    /// Create an invalid-value error.
    pub fn invalid_value(value: f64) -> Self {
        Self::InvalidValue { value }
    }

    /// Create a degenerate-circuit error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateCircuit {
            message: message.into(),
        }
    }
}
