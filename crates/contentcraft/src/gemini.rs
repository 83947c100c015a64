//! Async HTTP client for the Gemini `generateContent` endpoint.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::generate::{GenerateFuture, TextGenerator};

// ── Request types ──────────────────────────────────────────────────

/// `generateContent` request body. Only the single-turn text subset is modelled.
#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn containing `prompt`.
    pub fn user_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ── Response types ─────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawGenerateResponse {
    candidates: Option<Vec<RawCandidate>>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<ApiErrorResponse>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawCandidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

#[derive(Deserialize, Debug)]
struct ApiErrorEnvelope {
    error: ApiErrorResponse,
}

/// Token usage statistics.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
    pub total_token_count: Option<u32>,
}

/// Clean return type from [`GeminiClient::generate_text`].
#[derive(Debug)]
pub struct Completion {
    /// Every text part of the first candidate, concatenated.
    pub text: String,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageMetadata>,
}

/// Parse a successful `generateContent` body into a [`Completion`].
///
/// A body carrying an `error` object, a blocked prompt, no candidates, or a
/// candidate without text is an error.
pub fn parse_generate_response(body: &str) -> Result<Completion, String> {
    let parsed: RawGenerateResponse =
        serde_json::from_str(body).map_err(|e| format!("failed to parse response: {e}"))?;

    if let Some(err) = parsed.error {
        return Err(format!("Gemini API error: {}", err.message));
    }

    let candidate = parsed.candidates.and_then(|c| c.into_iter().next());
    let Some(candidate) = candidate else {
        return match parsed.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(format!("prompt was blocked by Gemini ({reason})")),
            None => Err("Gemini returned no candidates".to_string()),
        };
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(format!(
            "Gemini response contained no text (finish reason: {reason})"
        ));
    }

    Ok(Completion {
        text,
        finish_reason: candidate.finish_reason,
        usage: parsed.usage_metadata,
    })
}

/// Extract `error.message` from a non-2xx body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Prefix bare model ids with `models/`, as the REST path requires.
pub fn normalize_model(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for Gemini text generation.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for `model` against the public endpoint.
    pub fn new(api_key: impl Into<String>, model: &str) -> Result<Self, String> {
        Self::with_options(
            api_key,
            model,
            crate::GEMINI_API_BASE,
            Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_options(
        api_key: impl Into<String>,
        model: &str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("contentcraft/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: normalize_model(model),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/{}:generateContent", self.base_url, self.model)
    }

    /// Send `prompt` as a single user turn and return the generated text.
    pub async fn generate_text(&self, prompt: &str) -> Result<Completion, String> {
        let body = GenerateContentRequest::user_prompt(prompt);
        debug!(
            "Gemini request: model={}, prompt={} chars",
            self.model,
            prompt.chars().count()
        );
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(&body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        debug!(
            "Gemini response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(format!("Gemini API HTTP {status}: {}", error_message(&text)));
        }

        let completion = parse_generate_response(&text)?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage: prompt={}, candidates={}, total={}",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0),
                usage.total_token_count.unwrap_or(0),
            );
        }

        Ok(completion)
    }
}

impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a> {
        Box::pin(async move { self.generate_text(prompt).await.map(|c| c.text) })
    }
}
