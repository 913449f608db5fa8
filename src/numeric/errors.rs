// ============================================================================
// Numeric Errors
// Error types for context-rounded decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the largest representable decimal
    Overflow,
    /// Result below the most negative decimal, or a non-zero result smaller
    /// in magnitude than 28 decimal places can hold
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input value is invalid (NaN, infinite, or out of decimal range)
    InvalidInput,
    /// Requested significant-digit precision is outside 1..=28
    InvalidPrecision(u32),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result outside representable range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not convert value"),
            NumericError::InvalidPrecision(p) => write!(
                f,
                "invalid precision: {} significant digits (expected 1..=28)",
                p
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidPrecision(0).to_string(),
            "invalid precision: 0 significant digits (expected 1..=28)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
        assert_ne!(
            NumericError::InvalidPrecision(0),
            NumericError::InvalidPrecision(29)
        );
    }
}
