//! Error types for plan generation.

use thiserror::Error;

/// Plan generation errors.
///
/// Provider outages never show up here; they degrade to rest days.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid plan mode: {0:?} (expected full_body, muscle or body_part)")]
    InvalidMode(String),

    #[error("Invalid workout days: {0} (must be between 1 and {max})", max = crate::types::MAX_WORKOUT_DAYS)]
    InvalidWorkoutDays(u32),

    #[error("Provider error: {0}")]
    Provider(#[from] exercisedb_client::ExerciseDbError),
}

/// Result type alias for plan operations.
pub type PlanResult<T> = Result<T, PlanError>;
