// ============================================================================
// Numeric Module
// Context-rounded decimal arithmetic for vector coordinates
// ============================================================================
//
// This module provides:
// - DecimalContext: significant-digit precision + rounding strategy
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Coordinates are decimals; only magnitude and angles cross into f64
// - All arithmetic returns Result (no panics)
// - Precision is an explicit value, never process-wide state

mod context;
mod errors;

pub use context::{DecimalContext, DEFAULT_PRECISION, MAX_PRECISION};
pub use errors::{NumericError, NumericResult};
