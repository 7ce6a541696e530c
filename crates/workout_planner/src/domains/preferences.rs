use exercisedb_client::{Exercise, ExerciseProvider};

use super::lookup::{LookupKind, fetch_or_empty};
use crate::error::{PlanError, PlanResult};
use crate::types::PlanMode;

/// Exercises fetched for each preference.
pub const PREFERENCE_LIMIT: usize = 2;

/// Fetch a batch of exercises per preference, in the caller's order.
///
/// `Muscle` looks preferences up as target muscles, `BodyPart` as body
/// parts. Preferences the catalog does not know yield an empty batch.
pub async fn preference_batches(
    provider: &dyn ExerciseProvider,
    mode: PlanMode,
    preferences: &[String],
) -> PlanResult<Vec<Vec<Exercise>>> {
    let kind = match mode {
        PlanMode::Muscle => LookupKind::Target,
        PlanMode::BodyPart => LookupKind::BodyPart,
        PlanMode::FullBody => return Err(PlanError::InvalidMode(mode.to_string())),
    };

    let mut batches = Vec::with_capacity(preferences.len());
    for pref in preferences {
        let batch = fetch_or_empty(provider, kind, pref, PREFERENCE_LIMIT).await?;
        if batch.is_empty() {
            tracing::debug!("preference {:?} ({}) contributed nothing", pref, kind.label());
        }
        batches.push(batch);
    }
    Ok(batches)
}
