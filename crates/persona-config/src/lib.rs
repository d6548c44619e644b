use std::env;

use serde::{Deserialize, Serialize};

use self::gemini::GeminiConfig;
use self::ui::UiConfig;

pub mod gemini;
pub mod ui;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set")]
    MissingApiKey,
}

fn default_log_file() -> String {
    "persona.log".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Log destination; the terminal itself is owned by the UI
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Config {
    /// Build config from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Config {
            gemini: GeminiConfig::new(api_key),
            ui: UiConfig::default(),
            log_file: default_log_file(),
        })
    }
}
