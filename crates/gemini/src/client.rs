//! Blocking Gemini client.

use crate::api::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;
use deck_core::{Error, GenerationFailureKind, Result, TextGenerator};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Header carrying the API key, which keeps it out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error reasons Google reports for a bad or unusable key.
const CREDENTIAL_REASONS: &[&str] = &["API_KEY_INVALID", "API_KEY_SERVICE_BLOCKED"];

pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingCredential("API key is empty".into()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        log::debug!(
            "Requesting {} ({} prompt chars)",
            self.config.model,
            prompt.chars().count()
        );

        let response = self
            .http
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let parsed: GenerateContentResponse = response.json().map_err(|e| {
            Error::generation(
                GenerationFailureKind::Upstream,
                format!("invalid response body: {}", e),
            )
        })?;

        parsed.text().ok_or_else(|| {
            let reason = parsed.block_reason().unwrap_or("no candidates");
            Error::generation(
                GenerationFailureKind::Upstream,
                format!("response contained no text ({})", reason),
            )
        })
    }
}

/// Classify a failure to reach the API at all.
fn transport_error(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() || e.is_connect() {
        GenerationFailureKind::Network
    } else {
        GenerationFailureKind::Upstream
    };
    Error::generation(kind, e.to_string())
}

/// Classify a non-2xx response.
fn status_error(status: StatusCode, body: &str) -> Error {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();

    let credential_reason = parsed
        .as_ref()
        .map(|b| b.error.reasons().any(|r| CREDENTIAL_REASONS.contains(&r)))
        .unwrap_or(false);

    let kind = match status.as_u16() {
        401 | 403 => GenerationFailureKind::Credential,
        _ if credential_reason => GenerationFailureKind::Credential,
        408 | 504 => GenerationFailureKind::Network,
        _ => GenerationFailureKind::Upstream,
    };

    let detail = match parsed {
        Some(b) if !b.error.message.is_empty() => b.error.message,
        _ => body.trim().to_string(),
    };

    Error::generation(kind, format!("HTTP {}: {}", status.as_u16(), detail))
}
