// ============================================================================
// Vector Errors
// Error taxonomy for construction and geometric operations
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Why constructor input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// Zero coordinates supplied
    Empty,
    /// Input was a scalar rather than a sequence
    NotIterable,
    /// A coordinate could not be converted to a decimal
    InvalidCoordinate(String),
}

/// Operation during which a zero vector was normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroVectorContext {
    /// Direct call to `normalized`
    Normalize,
    /// Normalization inside `angle_with`
    Angle,
}

/// Which decomposition component could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Parallel,
    Orthogonal,
}

/// Errors raised by [`Vector`](crate::domain::Vector) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Malformed constructor input
    InvalidArgument(InvalidArgumentKind),

    /// Normalization attempted on a zero-magnitude vector
    ZeroVector { context: ZeroVectorContext },

    /// Projection basis is the zero vector
    NoUniqueComponent { component: Component },

    /// Cross product on an operand that is not 3-dimensional
    Dimension { found: usize },

    /// Cosine of the angle fell outside [-1, 1] after rounding
    AngleDomain { cosine: f64 },

    /// Decimal arithmetic failure
    Numeric(NumericError),
}

impl VectorError {
    pub(crate) const fn zero_vector(context: ZeroVectorContext) -> Self {
        VectorError::ZeroVector { context }
    }

    pub(crate) const fn no_unique(component: Component) -> Self {
        VectorError::NoUniqueComponent { component }
    }
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgumentKind::Empty => write!(f, "coordinates must be nonempty"),
            InvalidArgumentKind::NotIterable => write!(f, "coordinates must be an iterable"),
            InvalidArgumentKind::InvalidCoordinate(raw) => {
                write!(f, "coordinate {:?} is not a valid decimal", raw)
            },
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(kind) => write!(f, "invalid argument: {}", kind),
            VectorError::ZeroVector { context } => match context {
                ZeroVectorContext::Normalize => write!(f, "Cannot normalize the zero vector"),
                ZeroVectorContext::Angle => {
                    write!(f, "Cannot compute an angle with the zero vector")
                },
            },
            VectorError::NoUniqueComponent { component } => match component {
                Component::Parallel => write!(f, "No unique parallel component exists"),
                Component::Orthogonal => write!(f, "No unique orthogonal component exists"),
            },
            VectorError::Dimension { .. } => {
                write!(f, "Cross product can only be defined in three dimensions")
            },
            VectorError::AngleDomain { cosine } => {
                write!(f, "math domain error: acos({}) is undefined", cosine)
            },
            VectorError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for VectorError {
    fn from(err: NumericError) -> Self {
        VectorError::Numeric(err)
    }
}

impl From<InvalidArgumentKind> for VectorError {
    fn from(kind: InvalidArgumentKind) -> Self {
        VectorError::InvalidArgument(kind)
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::InvalidArgument(InvalidArgumentKind::Empty).to_string(),
            "invalid argument: coordinates must be nonempty"
        );
        assert_eq!(
            VectorError::InvalidArgument(InvalidArgumentKind::NotIterable).to_string(),
            "invalid argument: coordinates must be an iterable"
        );
        assert_eq!(
            VectorError::zero_vector(ZeroVectorContext::Normalize).to_string(),
            "Cannot normalize the zero vector"
        );
        assert_eq!(
            VectorError::zero_vector(ZeroVectorContext::Angle).to_string(),
            "Cannot compute an angle with the zero vector"
        );
        assert_eq!(
            VectorError::no_unique(Component::Orthogonal).to_string(),
            "No unique orthogonal component exists"
        );
        assert_eq!(
            VectorError::no_unique(Component::Parallel).to_string(),
            "No unique parallel component exists"
        );
        assert_eq!(
            VectorError::Dimension { found: 2 }.to_string(),
            "Cross product can only be defined in three dimensions"
        );
    }

    #[test]
    fn test_numeric_source() {
        let err: VectorError = NumericError::Overflow.into();
        assert_eq!(err, VectorError::Numeric(NumericError::Overflow));
        assert!(err.source().is_some());
        assert!(VectorError::Dimension { found: 4 }.source().is_none());
    }
}
