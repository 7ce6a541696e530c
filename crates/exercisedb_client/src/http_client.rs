//! HTTP client implementation for the ExerciseDB catalog.
//!
//! This module provides a reqwest-based implementation of the
//! [`ExerciseProvider`](crate::ExerciseProvider) trait.

use crate::config::Config;
use crate::utils::{is_addressable, normalize_identifier, take_ranked};
use crate::{Exercise, ExerciseDbError, ExerciseProvider};
use async_trait::async_trait;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Which catalog index a lookup goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lookup {
    Target,
    BodyPart,
}

impl Lookup {
    fn segment(self) -> &'static str {
        match self {
            Lookup::Target => "target",
            Lookup::BodyPart => "bodyPart",
        }
    }
}

/// Client for the ExerciseDB API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestExerciseDbClient {
    base_url: Url,
    api_host: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestExerciseDbClient {
    /// Create a new client from configuration.
    ///
    /// Fails when the base URL cannot be parsed or cannot carry path
    /// segments, or when the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ExerciseDbError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ExerciseDbError::Config(format!("invalid base url {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ExerciseDbError::Config(format!(
                "base url cannot carry a path: {}",
                config.base_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            base_url,
            api_host: config.api_host.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// `{base}/exercises/{index}/{identifier}` with the identifier
    /// normalized and percent-encoded as a single segment.
    fn lookup_url(&self, lookup: Lookup, identifier: &str) -> Result<Url, ExerciseDbError> {
        let identifier = normalize_identifier(identifier);
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ExerciseDbError::Config("base url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["exercises", lookup.segment(), identifier.as_str()]);
        Ok(url)
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(API_HOST_HEADER, &self.api_host)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> ExerciseDbError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body: String = body.chars().take(256).collect();
        ExerciseDbError::Status { status, body }
    }

    async fn fetch(
        &self,
        lookup: Lookup,
        identifier: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        if !is_addressable(&normalize_identifier(identifier)) {
            tracing::debug!(
                "exercisedb: skipping {} lookup for {:?}",
                lookup.segment(),
                identifier
            );
            return Ok(Vec::new());
        }
        let url = self.lookup_url(lookup, identifier)?;
        tracing::debug!("exercisedb: GET {}", url.path());

        let resp = self.get_request(url).send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        // Decode separately so a malformed payload is not mistaken for a
        // transport failure.
        let body = resp.text().await?;
        let exercises: Vec<Exercise> = serde_json::from_str(&body)?;
        tracing::debug!(
            "exercisedb: {} {:?} returned {} records",
            lookup.segment(),
            identifier,
            exercises.len()
        );
        Ok(take_ranked(exercises, limit))
    }
}

#[async_trait]
impl ExerciseProvider for ReqwestExerciseDbClient {
    async fn fetch_by_target(
        &self,
        muscle: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        self.fetch(Lookup::Target, muscle, limit).await
    }

    async fn fetch_by_body_part(
        &self,
        part: &str,
        limit: usize,
    ) -> Result<Vec<Exercise>, ExerciseDbError> {
        self.fetch(Lookup::BodyPart, part, limit).await
    }
}
