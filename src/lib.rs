// ============================================================================
// Decimal Vector Library
// Fixed-precision N-dimensional vectors with geometric decomposition
// ============================================================================

//! # Decimal Vector
//!
//! An immutable N-dimensional vector whose coordinates are decimals rounded
//! to a fixed number of significant digits, for checking geometry exercises.
//!
//! ## Features
//!
//! - **Explicit arithmetic context** ([`numeric::DecimalContext`], 3 significant
//!   digits by default) instead of process-wide precision
//! - **Linear combination** (`plus`, `minus`, `times_scalar`), `dot`, `magnitude`
//!   and `normalized`
//! - **Angles and alignment** (`angle_with`, `is_parallel_to`, `is_orthogonal_to`)
//! - **Decomposition** into components parallel and orthogonal to a basis
//! - **3-D cross product** with parallelogram and triangle areas
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let v = Vector::new([3, 4]).unwrap();
//! let basis = Vector::new([1, 1]).unwrap();
//!
//! let parallel = v.component_parallel_to(&basis).unwrap();
//! let orthogonal = v.component_orthogonal_to(&basis).unwrap();
//!
//! assert!(parallel.is_orthogonal_to(&orthogonal).unwrap());
//! assert_eq!(parallel.plus(&orthogonal).unwrap(), v);
//!
//! let angle = Vector::new([1, 0])
//!     .unwrap()
//!     .angle_with(&Vector::new([0, 1]).unwrap(), AngleUnit::Degrees)
//!     .unwrap();
//! println!("Angle: {angle:.1} degrees");
//! ```

pub mod domain;
pub mod geometry;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Component, InvalidArgumentKind, Vector, VectorError, VectorResult, ZeroVectorContext,
        DEFAULT_TOLERANCE,
    };
    pub use crate::geometry::AngleUnit;
    pub use crate::interfaces::IntoCoordinate;
    pub use crate::numeric::{DecimalContext, NumericError};
}
