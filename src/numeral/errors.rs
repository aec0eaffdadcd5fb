// ============================================================================
// Numeral Errors
// Error types for numeral validation and conversion
// ============================================================================

use super::symbols::{MAX_VALUE, MIN_VALUE};
use std::fmt;

/// Errors that can occur while validating a numeral string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input conforms to neither notation's syntax; carries the reason
    Malformed(String),
    /// Syntactically valid Arabic integer outside the representable range
    OutOfBounds(i32),
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::Malformed(reason) => {
                write!(f, "malformed numeral: {}", reason)
            },
            NumeralError::OutOfBounds(value) => write!(
                f,
                "value out of bounds: {} is not representable in [{}, {}]",
                value, MIN_VALUE, MAX_VALUE
            ),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
