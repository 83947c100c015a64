//! Runtime configuration with environment-driven defaults.
//!
//! [`AppConfig`] holds the credential and endpoint settings and turns them
//! into a [`GeminiClient`] via [`generator`](AppConfig::generator).

use std::time::Duration;

use tracing::warn;

use crate::gemini::GeminiClient;

/// Environment variable overriding the model id.
pub const MODEL_ENV: &str = "CONTENTCRAFT_MODEL";
/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "CONTENTCRAFT_API_BASE";

/// Settings shared by the CLI and the web server.
#[derive(Clone)]
pub struct AppConfig {
    /// Gemini API key. `None` blocks generation with a user-facing error.
    pub api_key: Option<String>,
    /// Model identifier. Default: `"models/gemini-flash-latest"`.
    pub model: String,
    /// API base URL. Default: the public Generative Language endpoint.
    pub api_base_url: String,
    /// Per-request timeout. Default: 120 seconds.
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: crate::DEFAULT_MODEL.to_string(),
            api_base_url: crate::GEMINI_API_BASE.to_string(),
            request_timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get(crate::API_KEY_ENV),
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            api_base_url: get(API_BASE_ENV).unwrap_or(defaults.api_base_url),
            request_timeout: defaults.request_timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the Gemini client, or `None` when no key is configured.
    pub fn generator(&self) -> Result<Option<GeminiClient>, String> {
        let Some(key) = &self.api_key else {
            warn!(
                "{} is not set. Add it as an environment variable before generating content.",
                crate::API_KEY_ENV
            );
            return Ok(None);
        };
        GeminiClient::with_options(
            key.clone(),
            &self.model,
            self.api_base_url.clone(),
            self.request_timeout,
        )
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert!(!config.has_api_key());
        assert_eq!(config.model, "models/gemini-flash-latest");
        assert_eq!(
            config.api_base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn reads_key_and_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("CONTENTCRAFT_MODEL", "gemini-1.5-pro"),
            ("CONTENTCRAFT_API_BASE", "http://localhost:8080"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")]));
        assert!(!config.has_api_key());
        assert!(config.generator().unwrap().is_none());
    }

    #[test]
    fn generator_built_when_key_present() {
        let config = AppConfig {
            api_key: Some("k".into()),
            ..Default::default()
        }
        .with_model("gemini-1.5-pro");
        let client = config.generator().unwrap().unwrap();
        assert!(client.endpoint().ends_with("/v1beta/models/gemini-1.5-pro:generateContent"));
    }

    #[test]
    fn debug_redacts_key() {
        let config = AppConfig {
            api_key: Some("super-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
