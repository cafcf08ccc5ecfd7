//! Planner error type.

/// Failures surfaced by [`crate::calculate_optimal_plan`].
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    /// A mandatory quantity was zero, negative or not a number.
    #[error("{field} must be greater than zero (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("failed to encode field boundary: {0}")]
    BoundaryEncoding(#[from] serde_json::Error),
}

impl PlanningError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PlanningError::InvalidInput { .. })
    }
}
