//! Weekly workout plan generation on top of an exercise catalog.
//!
//! [`generate_plan`] validates caller input, gathers exercises through an
//! [`ExerciseProvider`] and spreads them over the requested days:
//!
//! - `full_body`: one exercise per body part, grouped into six fixed
//!   anatomical groups; group `i` lands on day `i mod days + 1`.
//! - `muscle` / `body_part`: up to two exercises per preference; within a
//!   preference, exercise `j` lands on day `j mod days + 1`.
//!
//! Catalog outages never fail a request. The affected lookup contributes
//! nothing and the plan simply has more rest days.

use exercisedb_client::ExerciseProvider;

pub mod domains;
pub mod error;
pub mod logging;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use domains::{ANATOMICAL_GROUPS, distribute_batches, distribute_groups};
pub use error::{PlanError, PlanResult};
pub use exercisedb_client::Exercise;
pub use types::{MAX_WORKOUT_DAYS, PlanMode, PlanRequest, WeeklyPlan, day_label};

/// Build a plan from raw caller input.
///
/// Fails fast on an unknown `mode` or zero `workout_days`.
pub async fn generate_plan(
    provider: &dyn ExerciseProvider,
    workout_days: u32,
    mode: &str,
    preferences: &[String],
) -> PlanResult<WeeklyPlan> {
    let request = PlanRequest::new(workout_days, mode, preferences.to_vec())?;
    generate_plan_for(provider, &request).await
}

/// Build a plan from an already parsed request.
pub async fn generate_plan_for(
    provider: &dyn ExerciseProvider,
    request: &PlanRequest,
) -> PlanResult<WeeklyPlan> {
    let days = request.days()?;
    tracing::info!(
        "generating {} plan over {} days ({} preferences)",
        request.mode,
        days,
        request.preferences.len()
    );

    let schedule = match request.mode {
        PlanMode::FullBody => {
            if !request.preferences.is_empty() {
                tracing::debug!("full body plan ignores preferences");
            }
            let groups = domains::full_body_groups(provider).await?;
            distribute_groups(groups, days)
        }
        PlanMode::Muscle | PlanMode::BodyPart => {
            let batches =
                domains::preference_batches(provider, request.mode, &request.preferences).await?;
            distribute_batches(batches, days)
        }
    };

    let plan = WeeklyPlan {
        title: request.mode.title().to_string(),
        days: schedule,
    };
    tracing::info!(
        "plan ready: {} exercises, {} rest days",
        plan.total_exercises(),
        plan.rest_days().len()
    );
    Ok(plan)
}
