use crate::ExerciseDbError;
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://exercisedb.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "exercisedb.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_host: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Configuration pointing at `base_url` with default host and timeout.
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            api_key,
            api_host: DEFAULT_API_HOST.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ExerciseDbError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` so tests never touch the
    /// process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ExerciseDbError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_key = get("EXERCISEDB_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ExerciseDbError::Config("EXERCISEDB_API_KEY missing".into()))?;
        let api_host = get("EXERCISEDB_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.into());
        let base_url = get("EXERCISEDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout_secs = match get("EXERCISEDB_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(ExerciseDbError::Config(format!(
                        "EXERCISEDB_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    )));
                }
                Ok(secs) => secs,
            },
        };
        Ok(Self {
            api_key: SecretString::new(api_key.into()),
            api_host,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
