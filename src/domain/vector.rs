// ============================================================================
// Vector Domain Model
// Immutable N-dimensional vector over context-rounded decimal coordinates
// ============================================================================

use super::errors::{InvalidArgumentKind, VectorError, VectorResult, ZeroVectorContext};
use crate::interfaces::IntoCoordinate;
use crate::numeric::{DecimalContext, NumericError, NumericResult};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used by `is_zero` and `is_orthogonal_to`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Coordinate storage; vectors up to 4 dimensions stay inline.
pub type Coordinates = SmallVec<[Decimal; 4]>;

/// An immutable vector of decimal coordinates.
///
/// Every operation returns a new `Vector`; binary operations are evaluated
/// under the receiver's [`DecimalContext`] and the result carries that
/// context. Dimension is the coordinate count and is fixed at construction.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
///
/// let v = Vector::new([1, 2]).unwrap();
/// let w = Vector::new([3, 4]).unwrap();
/// assert_eq!(v.plus(&w).unwrap(), Vector::new([4, 6]).unwrap());
/// assert_eq!(w.magnitude().unwrap(), 5.0);
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "VectorRepr", into = "VectorRepr")
)]
pub struct Vector {
    coordinates: Coordinates,
    context: DecimalContext,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector under the default context (3 significant digits).
    ///
    /// Inputs may be integers, floats, decimals, or numeric strings.
    /// Conversion is exact; rounding only applies to later arithmetic.
    ///
    /// # Errors
    /// - `InvalidArgument(Empty)` if no coordinates are given
    /// - `InvalidArgument(InvalidCoordinate)` if an input does not convert
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        Self::with_context(DecimalContext::default(), coordinates)
    }

    /// Create a vector bound to an explicit arithmetic context.
    pub fn with_context<I>(context: DecimalContext, coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(IntoCoordinate::into_coordinate)
            .collect::<VectorResult<Coordinates>>()?;
        Self::from_decimals(context, coordinates)
    }

    pub(crate) fn from_decimals(
        context: DecimalContext,
        coordinates: Coordinates,
    ) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(InvalidArgumentKind::Empty.into());
        }
        Ok(Self {
            coordinates,
            context,
        })
    }

    /// Same coordinates, evaluated under a different context from now on.
    pub fn in_context(&self, context: DecimalContext) -> Self {
        Self {
            coordinates: self.coordinates.clone(),
            context,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn context(&self) -> DecimalContext {
        self.context
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    // ========================================================================
    // Linear Combination
    // ========================================================================

    /// Element-wise sum. With mismatched dimensions only the shared prefix
    /// is combined, so the result has the smaller dimension.
    pub fn plus(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |ctx, x, y| ctx.add(x, y))
    }

    /// Element-wise difference, truncated to the shorter operand like `plus`.
    pub fn minus(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |ctx, x, y| ctx.sub(x, y))
    }

    /// Multiply every coordinate by `scalar`.
    pub fn times_scalar<S: IntoCoordinate>(&self, scalar: S) -> VectorResult<Vector> {
        let scalar = scalar.into_coordinate()?;
        let ctx = self.context;
        let coordinates = self
            .coordinates
            .iter()
            .map(|&x| ctx.mul(scalar, x))
            .collect::<NumericResult<Coordinates>>()?;
        Self::from_decimals(ctx, coordinates)
    }

    fn zip_with<F>(&self, other: &Vector, op: F) -> VectorResult<Vector>
    where
        F: Fn(&DecimalContext, Decimal, Decimal) -> NumericResult<Decimal>,
    {
        let ctx = self.context;
        let coordinates = self
            .coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(&x, &y)| op(&ctx, x, y))
            .collect::<NumericResult<Coordinates>>()?;
        Self::from_decimals(ctx, coordinates)
    }

    // ========================================================================
    // Norm and Inner Product
    // ========================================================================

    /// Euclidean length. Squares and their running sum are rounded decimals;
    /// the square root is taken in `f64`.
    ///
    /// # Errors
    /// Every square must fit a `Decimal`, so coordinates are limited to
    /// roughly `1e-14..2.8e14` in magnitude. Outside that range this returns
    /// `Numeric(Underflow)` or `Numeric(Overflow)` instead of a silent zero.
    pub fn magnitude(&self) -> VectorResult<f64> {
        let ctx = self.context;
        let squares = self
            .coordinates
            .iter()
            .map(|&x| ctx.mul(x, x))
            .collect::<NumericResult<Coordinates>>()?;
        let sum_of_squares = ctx.sum(squares)?;
        Ok(ctx.to_f64(sum_of_squares)?.sqrt())
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// Returns `ZeroVector { context: Normalize }` when the magnitude is zero.
    pub fn normalized(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude()?;
        if magnitude == 0.0 {
            return Err(VectorError::zero_vector(ZeroVectorContext::Normalize));
        }

        let ctx = self.context;
        let magnitude = ctx.from_f64(magnitude)?;
        let inverse = ctx.div(Decimal::ONE, magnitude).map_err(|err| match err {
            // Magnitude too small to survive the decimal conversion
            NumericError::DivisionByZero => {
                VectorError::zero_vector(ZeroVectorContext::Normalize)
            },
            other => other.into(),
        })?;

        tracing::trace!(%magnitude, %inverse, "normalizing vector");
        self.times_scalar(inverse)
    }

    /// Inner product over the shared prefix of both vectors.
    pub fn dot(&self, other: &Vector) -> VectorResult<Decimal> {
        let ctx = self.context;
        let products = self
            .coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(&x, &y)| ctx.mul(x, y))
            .collect::<NumericResult<Coordinates>>()?;
        Ok(ctx.sum(products)?)
    }

    /// True when the magnitude is below [`DEFAULT_TOLERANCE`].
    pub fn is_zero(&self) -> VectorResult<bool> {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> VectorResult<bool> {
        Ok(self.magnitude()? < tolerance)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Equality compares coordinate sequences numerically (`4.0 == 4`); the
/// bound context is not part of a vector's identity.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{:?}<p={}>", self.coordinates.as_slice(), self.context.precision())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse a bracketed coordinate list.
    ///
    /// # Examples
    /// - "[1, 2.5, -3]" -> 3-D vector
    /// - "(1, 2)" -> 2-D vector
    /// - "5" -> `NotIterable` (a scalar, not a sequence)
    /// - "[]" -> `Empty`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .or_else(|| s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')))
            .ok_or(VectorError::InvalidArgument(InvalidArgumentKind::NotIterable))?;

        let inner = inner.trim();
        if inner.is_empty() {
            return Err(InvalidArgumentKind::Empty.into());
        }

        // Tolerate a single trailing comma, as in "(1,)"
        let inner = inner.strip_suffix(',').unwrap_or(inner);
        Vector::new(inner.split(',').map(str::trim))
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct VectorRepr {
    coordinates: Vec<Decimal>,
}

#[cfg(feature = "serde")]
impl TryFrom<VectorRepr> for Vector {
    type Error = VectorError;

    fn try_from(repr: VectorRepr) -> Result<Self, Self::Error> {
        Vector::new(repr.coordinates)
    }
}

#[cfg(feature = "serde")]
impl From<Vector> for VectorRepr {
    fn from(v: Vector) -> Self {
        VectorRepr {
            coordinates: v.coordinates.into_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl Vector {
    /// Build a vector from a JSON array of numbers or numeric strings.
    ///
    /// `null` and `[]` are rejected as `Empty`; any other non-array value
    /// is rejected as `NotIterable`.
    pub fn from_json(value: &serde_json::Value) -> VectorResult<Self> {
        use serde_json::Value;

        let items = match value {
            Value::Array(items) => items,
            Value::Null => return Err(InvalidArgumentKind::Empty.into()),
            _ => return Err(InvalidArgumentKind::NotIterable.into()),
        };

        let coordinates = items
            .iter()
            .map(|item| match item {
                Value::Number(n) => n.to_string().into_coordinate(),
                Value::String(s) => s.as_str().into_coordinate(),
                other => Err(VectorError::InvalidArgument(
                    InvalidArgumentKind::InvalidCoordinate(other.to_string()),
                )),
            })
            .collect::<VectorResult<Coordinates>>()?;
        Self::from_decimals(DecimalContext::default(), coordinates)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v<I>(coords: I) -> Vector
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        Vector::new(coords).unwrap()
    }

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_construction() {
        let x = v([1, 2, 3]);
        assert_eq!(x.dimension(), 3);
        assert_eq!(x.coordinates(), &[d("1"), d("2"), d("3")]);
        assert_eq!(x[1], d("2"));
        assert_eq!(x.context(), DecimalContext::default());
    }

    #[test]
    fn test_construction_from_strings_is_exact() {
        let x = v(["8.462", "7.893", "-8.187"]);
        assert_eq!(x[0], d("8.462"));
        assert_eq!(x[2], d("-8.187"));
    }

    #[test]
    fn test_empty_rejected() {
        let err = Vector::new(Vec::<i32>::new()).unwrap_err();
        assert_eq!(err, VectorError::InvalidArgument(InvalidArgumentKind::Empty));
    }

    #[test]
    fn test_invalid_coordinate_rejected() {
        let err = Vector::new(["1", "two"]).unwrap_err();
        assert!(matches!(
            err,
            VectorError::InvalidArgument(InvalidArgumentKind::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(v(["4.0", "6.00"]), v([4, 6]));
        assert_ne!(v([1, 2]), v([1, 2, 0]));
        assert_ne!(v([1, 2]), v([2, 1]));

        let precise = v([1, 2]).in_context(DecimalContext::high_precision());
        assert_eq!(precise, v([1, 2]));
    }

    #[test]
    fn test_plus_minus() {
        assert_eq!(v([1, 2]).plus(&v([3, 4])).unwrap(), v([4, 6]));
        assert_eq!(v([1, 2]).minus(&v([3, 4])).unwrap(), v([-2, -2]));
    }

    #[test]
    fn test_plus_truncates_to_shorter() {
        let sum = v([1, 2, 3]).plus(&v([1, 1])).unwrap();
        assert_eq!(sum, v([2, 3]));
        assert_eq!(sum.dimension(), 2);

        let diff = v([5]).minus(&v([1, 1, 1])).unwrap();
        assert_eq!(diff, v([4]));
    }

    #[test]
    fn test_times_scalar() {
        assert_eq!(v([1, 2]).times_scalar(3).unwrap(), v([3, 6]));
        assert_eq!(v([1, 2]).times_scalar("0.5").unwrap(), v(["0.5", "1"]));
        assert!(v([1]).times_scalar("x").is_err());
    }

    #[test]
    fn test_arithmetic_rounds_to_context() {
        let sum = v(["1.234"]).plus(&v([0])).unwrap();
        assert_eq!(sum, v(["1.23"]));

        let precise = Vector::with_context(DecimalContext::high_precision(), ["1.234"]).unwrap();
        let sum = precise.plus(&v([0])).unwrap();
        assert_eq!(sum, v(["1.234"]));
        assert_eq!(sum.context(), DecimalContext::high_precision());
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let x = v([1, 2]);
        let _ = x.times_scalar(10).unwrap();
        let _ = x.plus(&v([5, 5])).unwrap();
        assert_eq!(x, v([1, 2]));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(v([3, 4]).magnitude().unwrap(), 5.0);
        assert_eq!(v([0, 0]).magnitude().unwrap(), 0.0);
        assert_eq!(v([-2]).magnitude().unwrap(), 2.0);
    }

    #[test]
    fn test_normalized() {
        let unit = v([3, 4]).normalized().unwrap();
        assert_eq!(unit, v(["0.6", "0.8"]));
        assert!((unit.magnitude().unwrap() - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let err = v([0, 0]).normalized().unwrap_err();
        assert_eq!(
            err,
            VectorError::ZeroVector {
                context: ZeroVectorContext::Normalize
            }
        );
        assert_eq!(err.to_string(), "Cannot normalize the zero vector");
    }

    #[test]
    fn test_magnitude_out_of_range() {
        // 1e-20 squared has no representation in 28 decimal places
        let tiny = v(["1e-20", "0"]);
        assert_eq!(
            tiny.magnitude(),
            Err(VectorError::Numeric(NumericError::Underflow))
        );
        assert!(matches!(
            tiny.normalized(),
            Err(VectorError::Numeric(NumericError::Underflow))
        ));
        assert!(v(["1e-15"]).magnitude().is_err());

        let huge = Vector::with_context(DecimalContext::high_precision(), ["3e14"]).unwrap();
        assert_eq!(
            huge.magnitude(),
            Err(VectorError::Numeric(NumericError::Overflow))
        );
        let smallest = v(["1e-14"]).magnitude().unwrap();
        assert!((smallest - 1e-14).abs() < 1e-20);
    }

    #[test]
    fn test_float_coordinates_use_shortest_decimal() {
        assert_eq!(v([8.462f64]), v(["8.462"]));
        assert_eq!(v([0.1f64, 0.2f64])[0], d("0.1"));
    }

    #[test]
    fn test_dot() {
        assert_eq!(v([1, 2]).dot(&v([3, 4])).unwrap(), d("11"));
        assert_eq!(v([1, 0]).dot(&v([0, 1])).unwrap(), Decimal::ZERO);
        // 0.707 * 0.708 rounds to 0.501 and the running sum to 1.00
        assert_eq!(
            v(["0.707", "0.707"]).dot(&v(["0.708", "0.708"])).unwrap(),
            d("1.00")
        );
    }

    #[test]
    fn test_is_zero() {
        assert!(v([0, 0, 0]).is_zero().unwrap());
        assert!(v(["0.00000000001"]).is_zero().unwrap());
        assert!(!v([0, 1]).is_zero().unwrap());
        assert!(v(["0.001"]).is_zero_within(0.01).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(v([1, -2]).to_string(), "Vector: (1, -2)");
        assert_eq!(v(["1.50"]).to_string(), "Vector: (1.50)");
    }

    #[test]
    fn test_from_str() {
        let x: Vector = "[1, 2.5, -3]".parse().unwrap();
        assert_eq!(x, v(["1", "2.5", "-3"]));

        let y: Vector = " (4, 5,) ".parse().unwrap();
        assert_eq!(y, v([4, 5]));
    }

    #[test]
    fn test_from_str_scalar_is_not_iterable() {
        let err = "5".parse::<Vector>().unwrap_err();
        assert_eq!(
            err,
            VectorError::InvalidArgument(InvalidArgumentKind::NotIterable)
        );
        assert_eq!(
            err.to_string(),
            "invalid argument: coordinates must be an iterable"
        );
    }

    #[test]
    fn test_from_str_empty() {
        assert_eq!(
            "[ ]".parse::<Vector>().unwrap_err(),
            VectorError::InvalidArgument(InvalidArgumentKind::Empty)
        );
        assert!("[1,,2]".parse::<Vector>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        use serde_json::json;

        assert_eq!(
            Vector::from_json(&json!([1, "2.5", -3.25])).unwrap(),
            v(["1", "2.5", "-3.25"])
        );
        assert_eq!(
            Vector::from_json(&json!(5)).unwrap_err(),
            VectorError::InvalidArgument(InvalidArgumentKind::NotIterable)
        );
        assert_eq!(
            Vector::from_json(&json!(null)).unwrap_err(),
            VectorError::InvalidArgument(InvalidArgumentKind::Empty)
        );
        assert_eq!(
            Vector::from_json(&json!([])).unwrap_err(),
            VectorError::InvalidArgument(InvalidArgumentKind::Empty)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let x = v(["1.5", "2"]);
        let json = serde_json::to_string(&x).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        let empty: Result<Vector, _> = serde_json::from_str(r#"{"coordinates": []}"#);
        assert!(empty.is_err());
    }
}
