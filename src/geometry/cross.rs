// ============================================================================
// Cross Product and Derived Areas (3-D only)
// ============================================================================

use crate::domain::{Coordinates, Vector, VectorError, VectorResult};
use rust_decimal::Decimal;
use smallvec::smallvec;

impl Vector {
    fn as_triple(&self) -> VectorResult<[Decimal; 3]> {
        <[Decimal; 3]>::try_from(self.coordinates()).map_err(|_| VectorError::Dimension {
            found: self.dimension(),
        })
    }

    /// Standard 3-D cross product.
    ///
    /// # Errors
    /// Returns `Dimension` unless both operands have exactly 3 coordinates.
    ///
    /// # Example
    /// ```
    /// use decimal_vector::prelude::*;
    ///
    /// let v = Vector::new([5, 3, -2]).unwrap();
    /// let w = Vector::new([-1, 0, 3]).unwrap();
    /// assert_eq!(v.cross_product(&w).unwrap(), Vector::new([9, -13, 3]).unwrap());
    /// ```
    pub fn cross_product(&self, other: &Vector) -> VectorResult<Vector> {
        let [x1, y1, z1] = self.as_triple()?;
        let [x2, y2, z2] = other.as_triple()?;
        let ctx = self.context();

        let cx = ctx.sub(ctx.mul(y1, z2)?, ctx.mul(y2, z1)?)?;
        let cy = ctx.neg(ctx.sub(ctx.mul(x1, z2)?, ctx.mul(x2, z1)?)?)?;
        let cz = ctx.sub(ctx.mul(x1, y2)?, ctx.mul(x2, y1)?)?;

        let coordinates: Coordinates = smallvec![cx, cy, cz];
        Vector::from_decimals(ctx, coordinates)
    }

    /// Area of the parallelogram spanned by `self` and `other`.
    pub fn area_of_parallelogram(&self, other: &Vector) -> VectorResult<f64> {
        self.cross_product(other)?.magnitude()
    }

    #[doc(hidden)]
    #[deprecated(note = "use `area_of_parallelogram`")]
    pub fn area_of_parallelgram(&self, other: &Vector) -> VectorResult<f64> {
        self.area_of_parallelogram(other)
    }

    /// Area of the triangle spanned by `self` and `other`.
    pub fn area_of_triangle(&self, other: &Vector) -> VectorResult<f64> {
        Ok(self.area_of_parallelogram(other)? / 2.0)
    }
}
