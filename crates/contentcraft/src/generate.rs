//! One form submission → one generated response.
//!
//! [`generate_content`] is the only entry point the UI surfaces call. It
//! checks the credential, validates the form, builds the prompt, and makes a
//! single [`TextGenerator`] call. Local failures return before any network
//! traffic.

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::prompt::build_prompt;
use crate::request::{ContentRequest, FormError};

/// Success banner shown under the generated content.
pub const SUCCESS_MESSAGE: &str =
    "Content generated successfully! You can copy and use it directly.";

/// Boxed future returned by [`TextGenerator::generate`].
pub type GenerateFuture<'a> = Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>>;

/// A remote text-generation backend.
///
/// Uses a boxed future so that the trait is dyn-compatible. Errors are
/// human-readable strings; they are shown to the user unchanged.
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logs and responses.
    fn model(&self) -> &str;

    /// Generate text for a single prompt.
    fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a>;
}

/// How a failure should be presented.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Why a submission produced no content.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{} is missing. Please configure it first.", crate::API_KEY_ENV)]
    MissingApiKey,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Something went wrong while calling Gemini API: {0}")]
    Api(String),
}

impl GenerateError {
    pub fn severity(&self) -> Severity {
        match self {
            GenerateError::Form(_) => Severity::Warning,
            GenerateError::MissingApiKey | GenerateError::Api(_) => Severity::Error,
        }
    }
}

/// Successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub text: String,
    pub model: String,
    /// The exact prompt that was sent.
    pub prompt: String,
}

/// Run one submission.
///
/// `generator` is `None` when no API credential is configured; that is
/// reported before the form is even looked at.
pub async fn generate_content(
    generator: Option<&dyn TextGenerator>,
    request: &ContentRequest,
) -> Result<GeneratedContent, GenerateError> {
    let Some(generator) = generator else {
        warn!("generation blocked: {} is not set", crate::API_KEY_ENV);
        return Err(GenerateError::MissingApiKey);
    };

    if let Err(e) = request.validate() {
        warn!("generation blocked: {e:?}");
        return Err(e.into());
    }

    let prompt = build_prompt(request);
    info!(
        "Generating {} {} for {} in {} with {}",
        request.count(),
        request.content_type(),
        request.platform(),
        request.language(),
        generator.model()
    );

    match generator.generate(&prompt).await {
        Ok(text) => {
            info!("Generated {} chars", text.chars().count());
            Ok(GeneratedContent {
                text,
                model: generator.model().to_string(),
                prompt,
            })
        }
        Err(e) => {
            error!("Gemini call failed: {e}");
            Err(GenerateError::Api(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequiredField;
    use std::sync::Mutex;

    /// Records every prompt and replies with a canned result.
    struct FakeGenerator {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(reply: Result<&str, &str>) -> Self {
            Self {
                reply: reply.map(String::from).map_err(String::from),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    impl TextGenerator for FakeGenerator {
        fn model(&self) -> &str {
            "models/fake"
        }

        fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn filled() -> ContentRequest {
        ContentRequest::new("Handmade soap shop", "Beauty", "Launch a lavender bar")
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let err = generate_content(None, &filled()).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(
            err.to_string(),
            "GEMINI_API_KEY is missing. Please configure it first."
        );
    }

    #[tokio::test]
    async fn missing_key_wins_over_empty_form() {
        let err = generate_content(None, &ContentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
    }

    #[tokio::test]
    async fn empty_fields_never_reach_the_generator() {
        let fake = FakeGenerator::replying(Ok("unused"));
        let req = ContentRequest::new("Brand", " ", "");
        let err = generate_content(Some(&fake), &req).await.unwrap_err();

        assert_eq!(fake.calls(), 0);
        assert_eq!(err.severity(), Severity::Warning);
        match err {
            GenerateError::Form(FormError::MissingFields(fields)) => {
                assert_eq!(fields, vec![RequiredField::Niche, RequiredField::Goal]);
            }
            other => panic!("expected form error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_returns_text_and_sent_prompt() {
        let fake = FakeGenerator::replying(Ok("1. Lather up"));
        let req = filled();
        let content = generate_content(Some(&fake), &req).await.unwrap();

        assert_eq!(content.text, "1. Lather up");
        assert_eq!(content.model, "models/fake");
        assert_eq!(content.prompt, build_prompt(&req));
        assert_eq!(fake.calls(), 1);
        assert_eq!(fake.prompts.lock().unwrap()[0], content.prompt);
    }

    #[tokio::test]
    async fn api_errors_are_surfaced_verbatim() {
        let fake = FakeGenerator::replying(Err("Gemini API HTTP 429 Too Many Requests: Quota exceeded"));
        let err = generate_content(Some(&fake), &filled()).await.unwrap_err();

        assert_eq!(fake.calls(), 1);
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(
            err.to_string(),
            "Something went wrong while calling Gemini API: Gemini API HTTP 429 Too Many Requests: Quota exceeded"
        );
    }
}
