// ============================================================================
// Domain Models Module
// The vector value type and its error taxonomy
// ============================================================================

pub mod errors;
pub mod vector;

pub use errors::{
    Component, InvalidArgumentKind, VectorError, VectorResult, ZeroVectorContext,
};
pub use vector::{Coordinates, Vector, DEFAULT_TOLERANCE};
