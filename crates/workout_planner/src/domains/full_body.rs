use exercisedb_client::{Exercise, ExerciseProvider};

use super::lookup::{LookupKind, fetch_or_empty};
use crate::error::PlanResult;

/// Body parts trained together, in scheduling order.
pub const ANATOMICAL_GROUPS: [&[&str]; 6] = [
    &["chest", "shoulders"],
    &["back", "upper arms"],
    &["waist"],
    &["lower arms", "neck"],
    &["upper legs", "lower legs"],
    &["cardio"],
];

const PER_PART_LIMIT: usize = 1;

/// One exercise per body part, grouped by [`ANATOMICAL_GROUPS`].
///
/// Groups for which the provider returned nothing are left out, so the
/// result holds at most six groups, never an empty one.
pub async fn full_body_groups(provider: &dyn ExerciseProvider) -> PlanResult<Vec<Vec<Exercise>>> {
    let mut groups = Vec::with_capacity(ANATOMICAL_GROUPS.len());
    for parts in ANATOMICAL_GROUPS {
        let mut group = Vec::with_capacity(parts.len());
        for part in parts {
            let found = fetch_or_empty(provider, LookupKind::BodyPart, part, PER_PART_LIMIT).await?;
            if let Some(first) = found.into_iter().next() {
                group.push(first);
            }
        }
        if group.is_empty() {
            tracing::debug!("full body: no exercises for group {:?}", parts);
            continue;
        }
        groups.push(group);
    }
    Ok(groups)
}
