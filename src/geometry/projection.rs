// ============================================================================
// Parallel / Orthogonal Decomposition
// Splits a vector into components along and across a basis vector
// ============================================================================

use crate::domain::{Component, Vector, VectorError, VectorResult};

impl Vector {
    /// Projection of `self` onto the direction of `basis`.
    ///
    /// # Errors
    /// Returns `NoUniqueComponent { component: Orthogonal }` when `basis` is
    /// the zero vector. The orthogonal tag is shared by both decomposition
    /// operations so callers see one failure for a degenerate basis.
    pub fn component_parallel_to(&self, basis: &Vector) -> VectorResult<Vector> {
        let unit = basis
            .in_context(self.context())
            .normalized()
            .map_err(|err| match err {
                VectorError::ZeroVector { .. } => {
                    tracing::debug!("zero basis for parallel component");
                    VectorError::no_unique(Component::Orthogonal)
                },
                other => other,
            })?;

        let weight = self.dot(&unit)?;
        unit.times_scalar(weight)
    }

    /// `self` minus its projection onto `basis`.
    ///
    /// # Errors
    /// Returns `NoUniqueComponent { component: Orthogonal }` when `basis` is
    /// the zero vector.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> VectorResult<Vector> {
        let parallel = self
            .component_parallel_to(basis)
            .map_err(|err| match err {
                // component_parallel_to already reports Orthogonal; this arm
                // keeps the orthogonal tag if that ever changes
                VectorError::NoUniqueComponent {
                    component: Component::Parallel,
                } => VectorError::no_unique(Component::Orthogonal),
                other => other,
            })?;
        self.minus(&parallel)
    }
}
