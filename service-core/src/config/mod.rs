use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Listener settings shared by every service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load `.env` (if present), then `configuration.*` and `APP__*` variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
