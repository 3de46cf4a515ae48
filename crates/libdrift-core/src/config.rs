use std::path::PathBuf;

use crate::error::DriftError;

/// Environment variable naming the Gemini API key (required)
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding the data directory
pub const ENV_DATA_DIR: &str = "DRIFT_DATA_DIR";

/// Environment variable overriding the model name
pub const ENV_MODEL: &str = "GEMINI_MODEL";

const DEFAULT_DATA_DIR: &str = ".drift";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Process-wide configuration, loaded once at startup.
///
/// Core logic never reads the environment; everything it needs is resolved
/// here and handed to the adapter constructors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the sled database
    pub data_dir: PathBuf,
    /// API key for the summarization service
    pub api_key: String,
    /// Model name sent to the summarization service
    pub model: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing API key is a fatal configuration error; the process must
    /// exit before any core operation runs.
    pub fn from_env() -> Result<Self, DriftError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DriftError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DriftError::Config(format!("{} environment variable is not set", ENV_API_KEY))
            })?;

        let data_dir = lookup(ENV_DATA_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let model = lookup(ENV_MODEL)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            data_dir,
            api_key,
            model,
        })
    }
}
