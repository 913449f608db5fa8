// ============================================================================
// Geometry Module
// Operations derived from linear combination, dot product, and normalization
// ============================================================================

mod angle;
mod cross;
mod projection;

pub use angle::AngleUnit;
