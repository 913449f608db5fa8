// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod coordinate;

pub use coordinate::IntoCoordinate;
