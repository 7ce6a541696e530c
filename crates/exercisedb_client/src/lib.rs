//! `ExerciseProvider` trait and a reqwest-based ExerciseDB client.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod utils;

#[derive(Debug, Error)]
pub enum ExerciseDbError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed exercise payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExerciseDbError {
    /// Transport failures and non-success statuses. Callers may degrade
    /// these to an empty result; everything else is a real fault.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

/// A single exercise record as served by the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "bodyPart")]
    pub body_part: String,
    pub target: String,
    pub equipment: String,
    #[serde(rename = "gifUrl", alias = "mediaUrl")]
    pub media_url: String,
    #[serde(
        rename = "secondaryMuscles",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub secondary_muscles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

#[async_trait]
pub trait ExerciseProvider: Send + Sync + 'static {
    /// Up to `limit` exercises whose primary target muscle is `muscle`.
    async fn fetch_by_target(
        &self,
        muscle: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError>;

    /// Up to `limit` exercises for the body part `part`.
    async fn fetch_by_body_part(
        &self,
        part: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError>;
}
