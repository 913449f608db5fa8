// ============================================================================
// Decimal Context
// Significant-digit rounding context for all vector arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest significant-digit precision a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Precision used by [`DecimalContext::default`].
pub const DEFAULT_PRECISION: u32 = 3;

/// Arithmetic context: every operation computes the exact result and then
/// rounds it to `precision` significant digits using `rounding`.
///
/// A context is a plain value. It is bound into each [`Vector`] at
/// construction and travels with the results of its operations, so two
/// vectors built under different contexts never share hidden state.
///
/// # Example
/// ```
/// use decimal_vector::numeric::DecimalContext;
/// use rust_decimal::Decimal;
///
/// let ctx = DecimalContext::default(); // 3 significant digits, half-even
/// let third = ctx.div(Decimal::ONE, Decimal::from(3)).unwrap();
/// assert_eq!(third, Decimal::new(333, 3));
/// ```
///
/// [`Vector`]: crate::domain::Vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: u32,
    rounding: RoundingStrategy,
}

impl DecimalContext {
    /// Create a context with the given significant-digit precision and
    /// round-half-even rounding.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` unless `1 <= precision <= 28`.
    pub fn new(precision: u32) -> NumericResult<Self> {
        let ctx = Self {
            precision,
            rounding: RoundingStrategy::MidpointNearestEven,
        };
        ctx.validate()?;
        Ok(ctx)
    }

    /// Builder method: set the rounding strategy
    pub fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the context
    pub fn validate(&self) -> NumericResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(NumericError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn rounding(&self) -> RoundingStrategy {
        self.rounding
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round a value to the context's significant digits.
    #[inline]
    pub fn round(&self, value: Decimal) -> NumericResult<Decimal> {
        value
            .round_sf_with_strategy(self.precision, self.rounding)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the exact sum is out of range.
    #[inline]
    pub fn add(&self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let sum = lhs.checked_add(rhs).ok_or_else(|| {
            if rhs.is_sign_positive() {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        self.round(sum)
    }

    /// Checked subtraction, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the exact difference is out of range.
    #[inline]
    pub fn sub(&self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let diff = lhs.checked_sub(rhs).ok_or_else(|| {
            if rhs.is_sign_negative() {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        self.round(diff)
    }

    /// Checked multiplication, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` when the product is too large, and `Underflow` when
    /// two non-zero operands multiply to less than 28 decimal places can hold.
    #[inline]
    pub fn mul(&self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let product = lhs.checked_mul(rhs).ok_or_else(|| {
            if lhs.is_sign_negative() == rhs.is_sign_negative() {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        if product.is_zero() && !lhs.is_zero() && !rhs.is_zero() {
            return Err(NumericError::Underflow);
        }
        self.round(product)
    }

    /// Checked division, rounded.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero, and `Underflow` when a
    /// non-zero quotient is too small to represent.
    #[inline]
    pub fn div(&self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = lhs.checked_div(rhs).ok_or(NumericError::Overflow)?;
        if quotient.is_zero() && !lhs.is_zero() {
            return Err(NumericError::Underflow);
        }
        self.round(quotient)
    }

    /// Negation, rounded (negation never overflows a `Decimal`).
    #[inline]
    pub fn neg(&self, value: Decimal) -> NumericResult<Decimal> {
        self.round(-value)
    }

    /// Left fold of rounded additions starting from zero, so every partial
    /// sum is rounded exactly as a running total would be.
    pub fn sum<I>(&self, values: I) -> NumericResult<Decimal>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, x| self.add(acc, x))
    }

    // ========================================================================
    // Real-number boundary
    // ========================================================================

    /// Convert a decimal into a real number for `sqrt`/`acos`.
    #[inline]
    pub fn to_f64(&self, value: Decimal) -> NumericResult<f64> {
        value.to_f64().ok_or(NumericError::InvalidInput)
    }

    /// Convert a real number back into a decimal (unrounded).
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities, and magnitudes a `Decimal`
    /// cannot hold.
    #[inline]
    pub fn from_f64(&self, value: f64) -> NumericResult<Decimal> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        Decimal::from_f64(value).ok_or(NumericError::InvalidInput)
    }
}

// ============================================================================
// Preset Contexts
// ============================================================================

impl DecimalContext {
    /// Geometry-exercise context: 3 significant digits, half-even rounding
    pub const fn exercise() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            rounding: RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Full `Decimal` precision (28 significant digits), half-even rounding
    pub const fn high_precision() -> Self {
        Self {
            precision: MAX_PRECISION,
            rounding: RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::exercise()
    }
}

// ============================================================================
// Tests
// ============================================================================
