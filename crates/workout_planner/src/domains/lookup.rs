use exercisedb_client::{Exercise, ExerciseDbError, ExerciseProvider};

use crate::error::PlanResult;

pub const PROVIDER_FAILURES_METRIC: &str = "workout_planner_provider_failures_total";

/// Catalog index used for a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Target,
    BodyPart,
}

impl LookupKind {
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Target => "target",
            LookupKind::BodyPart => "body_part",
        }
    }
}

/// Fetch up to `limit` exercises, turning an unreachable or refusing
/// provider into an empty list. Other failures propagate.
pub async fn fetch_or_empty(
    provider: &dyn ExerciseProvider,
    kind: LookupKind,
    identifier: &str,
    limit: usize,
) -> PlanResult<Vec<Exercise>> {
    let result = match kind {
        LookupKind::Target => provider.fetch_by_target(identifier, limit).await,
        LookupKind::BodyPart => provider.fetch_by_body_part(identifier, limit).await,
    };
    recover_unavailable(result, kind, identifier)
}

pub fn recover_unavailable(
    result: Result<Vec<Exercise>, ExerciseDbError>,
    kind: LookupKind,
    identifier: &str,
) -> PlanResult<Vec<Exercise>> {
    match result {
        Ok(exercises) => Ok(exercises),
        Err(e) if e.is_unavailable() => {
            tracing::warn!(
                "provider lookup {} {:?} failed, scheduling nothing for it: {}",
                kind.label(),
                identifier,
                e
            );
            metrics::counter!(PROVIDER_FAILURES_METRIC, "lookup" => kind.label()).increment(1);
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::test_utils::{ScriptedProvider, exercise};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

    #[test]
    fn status_failure_recovers_to_empty() {
        let err = ExerciseDbError::Status {
            status: 500,
            body: "boom".into(),
        };
        let out = recover_unavailable(Err(err), LookupKind::Target, "abs").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn decode_failure_propagates() {
        let decode = serde_json::from_str::<Vec<Exercise>>("nope").unwrap_err();
        let err = recover_unavailable(
            Err(ExerciseDbError::Decode(decode)),
            LookupKind::BodyPart,
            "waist",
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::Provider(ExerciseDbError::Decode(_))));
    }

    fn failure_counts(snapshotter: &Snapshotter) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| key.key().name() == PROVIDER_FAILURES_METRIC)
            .map(|(key, _, _, value)| {
                let lookup = key
                    .key()
                    .labels()
                    .find(|l| l.key() == "lookup")
                    .map(|l| l.value().to_string())
                    .unwrap_or_default();
                let count = match value {
                    DebugValue::Counter(n) => n,
                    other => panic!("unexpected metric value: {other:?}"),
                };
                (lookup, count)
            })
            .collect();
        counts.sort();
        counts
    }

    fn unavailable() -> ExerciseDbError {
        ExerciseDbError::Status {
            status: 503,
            body: String::new(),
        }
    }

    #[test]
    fn degraded_lookups_are_counted_per_kind() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        metrics::with_local_recorder(&recorder, || {
            recover_unavailable(Err(unavailable()), LookupKind::Target, "abs").unwrap();
            recover_unavailable(Err(unavailable()), LookupKind::Target, "lats").unwrap();
            recover_unavailable(Err(unavailable()), LookupKind::BodyPart, "waist").unwrap();
            recover_unavailable(Ok(vec![]), LookupKind::BodyPart, "neck").unwrap();
        });
        assert_eq!(
            failure_counts(&snapshotter),
            vec![("body_part".to_string(), 1), ("target".to_string(), 2)]
        );
    }

    #[test]
    fn fatal_lookups_are_not_counted() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        metrics::with_local_recorder(&recorder, || {
            let decode = serde_json::from_str::<Vec<Exercise>>("{}").unwrap_err();
            let res = recover_unavailable(
                Err(ExerciseDbError::Decode(decode)),
                LookupKind::Target,
                "abs",
            );
            assert!(res.is_err());
        });
        assert!(
            failure_counts(&snapshotter)
                .iter()
                .all(|(_, count)| *count == 0)
        );
    }

    #[test]
    fn planner_outage_increments_counter() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        let provider = ScriptedProvider::new()
            .failing_body_part("chest")
            .failing_body_part("cardio");
        metrics::with_local_recorder(&recorder, || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let groups = rt
                .block_on(crate::domains::full_body_groups(&provider))
                .unwrap();
            assert!(groups.is_empty());
        });
        assert_eq!(failure_counts(&snapshotter), vec![("body_part".to_string(), 2)]);
    }

    #[tokio::test]
    async fn fetch_routes_by_kind() {
        let provider = ScriptedProvider::new()
            .with_target("biceps", vec![exercise("curl", "upper arms", "biceps")])
            .with_body_part("waist", vec![exercise("crunch", "waist", "abs")]);

        let t = fetch_or_empty(&provider, LookupKind::Target, "biceps", 2)
            .await
            .unwrap();
        let b = fetch_or_empty(&provider, LookupKind::BodyPart, "waist", 2)
            .await
            .unwrap();
        assert_eq!(t[0].name, "curl");
        assert_eq!(b[0].name, "crunch");
        assert_eq!(
            provider.calls(),
            vec!["target:biceps:2".to_string(), "body_part:waist:2".to_string()]
        );
    }
}
