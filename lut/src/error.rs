//! Encoding failures.

use thiserror::Error;

/// A real value that cannot be represented in the requested encoding.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EncodeError {
    /// The value is NaN or infinite.
    #[error("cannot encode non-finite value {value} as {format}")]
    NonFinite {
        /// Offending value.
        value: f64,
        /// Target encoding name.
        format: &'static str,
    },
    /// The value is below zero and the encoding is unsigned.
    #[error("cannot encode negative value {value} as {format}")]
    Negative {
        /// Offending value.
        value: f64,
        /// Target encoding name.
        format: &'static str,
    },
    /// The value is finite but rounds past the largest finite code.
    #[error("value {value} overflows {format}")]
    Overflow {
        /// Offending value.
        value: f64,
        /// Target encoding name.
        format: &'static str,
    },
}
