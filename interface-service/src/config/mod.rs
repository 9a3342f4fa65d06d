use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const COHERE_API_KEY_VAR: &str = "COHERE_API_KEY";

const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.com";
const DEFAULT_COHERE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub cohere: CohereConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CohereConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    /// Request timeout for outbound calls, in seconds.
    pub timeout_secs: u64,
}

impl InterfaceConfig {
    /// Load and validate all settings. Fails if the Cohere credential is missing.
    pub fn load() -> Result<Self, AppError> {
        // Also pulls in `.env`, so it must run before the credential is read.
        let common = core_config::Config::load()?;
        let cohere = CohereConfig::from_env()?;

        Ok(InterfaceConfig { common, cohere })
    }
}

impl CohereConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::from_api_key(env::var(COHERE_API_KEY_VAR).ok())?;

        if let Ok(base_url) = env::var("COHERE_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = env::var("COHERE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "COHERE_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?;
        }

        Ok(config)
    }

    /// Validate a raw credential value. Absent, empty and blank keys are rejected.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self, AppError> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(CohereConfig {
                api_key: Secret::new(key),
                base_url: DEFAULT_COHERE_BASE_URL.to_string(),
                timeout_secs: DEFAULT_COHERE_TIMEOUT_SECS,
            }),
            _ => Err(AppError::ConfigError(anyhow::anyhow!(
                "No Cohere API key found. Please set the {} environment variable.",
                COHERE_API_KEY_VAR
            ))),
        }
    }
}
