//! Shared test utilities: a scripted in-memory `ExerciseProvider` that
//! records every lookup it serves.
#![cfg(test)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use exercisedb_client::{Exercise, ExerciseDbError, ExerciseProvider};

pub fn exercise(name: &str, body_part: &str, target: &str) -> Exercise {
    Exercise {
        id: None,
        name: name.to_string(),
        body_part: body_part.to_string(),
        target: target.to_string(),
        equipment: "body weight".to_string(),
        media_url: format!("https://cdn.example/{}.gif", name.replace(' ', "_")),
        secondary_muscles: vec![],
        instructions: vec![],
    }
}

#[derive(Clone)]
enum Reply {
    Exercises(Vec<Exercise>),
    Unavailable,
    Malformed,
}

/// Unknown identifiers answer with an empty list, like the real catalog.
#[derive(Default)]
pub struct ScriptedProvider {
    targets: HashMap<String, Reply>,
    body_parts: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, muscle: &str, exercises: Vec<Exercise>) -> Self {
        self.targets
            .insert(muscle.to_lowercase(), Reply::Exercises(exercises));
        self
    }

    pub fn with_body_part(mut self, part: &str, exercises: Vec<Exercise>) -> Self {
        self.body_parts
            .insert(part.to_lowercase(), Reply::Exercises(exercises));
        self
    }

    pub fn failing_target(mut self, muscle: &str) -> Self {
        self.targets.insert(muscle.to_lowercase(), Reply::Unavailable);
        self
    }

    pub fn failing_body_part(mut self, part: &str) -> Self {
        self.body_parts.insert(part.to_lowercase(), Reply::Unavailable);
        self
    }

    pub fn malformed_body_part(mut self, part: &str) -> Self {
        self.body_parts.insert(part.to_lowercase(), Reply::Malformed);
        self
    }

    /// Lookups served so far, as `kind:identifier:limit`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(
        &self,
        kind: &str,
        table: &HashMap<String, Reply>,
        identifier: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        let key = identifier.trim().to_lowercase();
        self.calls
            .lock()
            .unwrap()
            .push(format!("{kind}:{key}:{limit}"));
        match table.get(&key).cloned() {
            None => Ok(vec![]),
            Some(Reply::Exercises(mut exs)) => {
                exs.truncate(limit);
                Ok(exs)
            }
            Some(Reply::Unavailable) => Err(ExerciseDbError::Status {
                status: 503,
                body: "unavailable".into(),
            }),
            Some(Reply::Malformed) => {
                let err = serde_json::from_str::<Vec<Exercise>>("{\"message\":1}").unwrap_err();
                Err(ExerciseDbError::Decode(err))
            }
        }
    }
}

#[async_trait]
impl ExerciseProvider for ScriptedProvider {
    async fn fetch_by_target(
        &self,
        muscle: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        self.answer("target", &self.targets, muscle, limit)
    }

    async fn fetch_by_body_part(
        &self,
        part: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        self.answer("body_part", &self.body_parts, part, limit)
    }
}
