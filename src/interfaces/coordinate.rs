// ============================================================================
// Coordinate Conversion Interface
// Defines how numbers and their string forms become decimal coordinates
// ============================================================================

use crate::domain::{InvalidArgumentKind, VectorError, VectorResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Conversion of a single constructor input into a decimal coordinate.
///
/// Conversion is exact: no context rounding is applied here. Rounding only
/// happens on the results of arithmetic.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> VectorResult<Decimal>;
}

fn invalid(raw: impl ToString) -> VectorError {
    VectorError::InvalidArgument(InvalidArgumentKind::InvalidCoordinate(raw.to_string()))
}

macro_rules! impl_into_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for $t {
                #[inline]
                fn into_coordinate(self) -> VectorResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_coordinate_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoCoordinate for f64 {
    fn into_coordinate(self) -> VectorResult<Decimal> {
        if !self.is_finite() {
            return Err(invalid(self));
        }
        Decimal::from_f64(self).ok_or_else(|| invalid(self))
    }
}

impl IntoCoordinate for f32 {
    fn into_coordinate(self) -> VectorResult<Decimal> {
        if !self.is_finite() {
            return Err(invalid(self));
        }
        Decimal::from_f32(self).ok_or_else(|| invalid(self))
    }
}

impl IntoCoordinate for Decimal {
    #[inline]
    fn into_coordinate(self) -> VectorResult<Decimal> {
        Ok(self)
    }
}

impl IntoCoordinate for &Decimal {
    #[inline]
    fn into_coordinate(self) -> VectorResult<Decimal> {
        Ok(*self)
    }
}

impl IntoCoordinate for &str {
    /// Accepts plain (`"-1.25"`) and scientific (`"1.5e3"`) notation.
    fn into_coordinate(self) -> VectorResult<Decimal> {
        let s = self.trim();
        s.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| invalid(self))
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> VectorResult<Decimal> {
        self.as_str().into_coordinate()
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> VectorResult<Decimal> {
        self.as_str().into_coordinate()
    }
}
