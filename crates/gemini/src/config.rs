//! Gemini client configuration, read from the environment.

use deck_core::{Error, Result};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variables holding the API key, checked in order.
const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Build a config from process environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.init_from_env()?;
        Ok(config)
    }

    pub fn init_from_env(&mut self) -> Result<()> {
        self.init_from(|key| env::var(key).ok())
    }

    /// Fill the config from a variable lookup.
    ///
    /// The API key is required; model, endpoint and timeout keep their
    /// defaults when unset or blank.
    pub fn init_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        self.api_key = API_KEY_VARS
            .iter()
            .find_map(|&key| non_blank(key))
            .ok_or_else(|| {
                Error::MissingCredential("API key not found! Set API_KEY in your .env file".into())
            })?
            .trim()
            .to_string();

        if let Some(model) = non_blank("GEMINI_MODEL") {
            self.model = model.trim().to_string();
        }
        if let Some(endpoint) = non_blank("GEMINI_ENDPOINT") {
            self.endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }
        if let Some(timeout) = non_blank("GEMINI_TIMEOUT_SECS") {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::ConfigError(format!("GEMINI_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
        }

        Ok(())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
