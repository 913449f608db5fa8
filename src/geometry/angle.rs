// ============================================================================
// Angles and Alignment Predicates
// ============================================================================

use crate::domain::{Vector, VectorError, VectorResult, ZeroVectorContext, DEFAULT_TOLERANCE};
use std::f64::consts::PI;

/// Unit in which `angle_with` reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    /// Angle between `self` and `other`.
    ///
    /// When the two unit vectors are coordinate-for-coordinate identical the
    /// result is exactly `0` without calling `acos`, since rounding can push
    /// their dot product just past `1`. Any other cosine outside `[-1, 1]`
    /// surfaces as `AngleDomain`.
    ///
    /// # Errors
    /// - `ZeroVector { context: Angle }` if either operand is the zero vector
    /// - `AngleDomain` if the rounded cosine leaves the domain of `acos`
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        let u1 = self.normalized().map_err(in_angle)?;
        let u2 = other.in_context(self.context()).normalized().map_err(in_angle)?;

        if u1.coincides_with(&u2) {
            return Ok(0.0);
        }

        let cosine = self.context().to_f64(u1.dot(&u2)?)?;
        if !(-1.0..=1.0).contains(&cosine) {
            tracing::debug!(cosine, "cosine outside acos domain");
            return Err(VectorError::AngleDomain { cosine });
        }

        let radians = cosine.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * (180.0 / PI),
        })
    }

    /// Every coordinate of `self` equals its counterpart in `other`. Pairing
    /// is by position, so a longer `other` can still coincide.
    fn coincides_with(&self, other: &Vector) -> bool {
        self.dimension() <= other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(x, y)| x == y)
    }

    /// True if either vector is zero or the angle between them is exactly
    /// `0` or exactly `π`. No tolerance is applied to the angle.
    pub fn is_parallel_to(&self, other: &Vector) -> VectorResult<bool> {
        if self.is_zero()? || other.is_zero()? {
            return Ok(true);
        }
        let angle = self.angle_with(other, AngleUnit::Radians)?;
        Ok(angle == 0.0 || angle == PI)
    }

    /// True if `|self · other|` is below [`DEFAULT_TOLERANCE`].
    pub fn is_orthogonal_to(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_to_within(other, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: f64) -> VectorResult<bool> {
        let dot = self.context().to_f64(self.dot(other)?)?;
        Ok(dot.abs() < tolerance)
    }
}

fn in_angle(err: VectorError) -> VectorError {
    match err {
        VectorError::ZeroVector { .. } => {
            tracing::debug!("zero vector while computing angle");
            VectorError::ZeroVector {
                context: ZeroVectorContext::Angle,
            }
        },
        other => other,
    }
}
