//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contentcraft::prelude::*;
use serde::Serialize;
use tracing::warn;

/// The form page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

/// GET / — The form page.
pub async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/health — Liveness check.
pub async fn get_health() -> StatusCode {
    StatusCode::NO_CONTENT
}

// ── Options ──────────────────────────────────────────────────────────

/// One dropdown entry: the wire value to submit and the text to show.
#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub value: serde_json::Value,
    pub label: &'static str,
}

/// Slider bounds.
#[derive(Debug, Serialize)]
pub struct CountRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// Body of GET /api/options.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub platforms: Vec<OptionEntry>,
    pub tones: Vec<OptionEntry>,
    pub content_types: Vec<OptionEntry>,
    pub languages: Vec<OptionEntry>,
    pub count: CountRange,
    pub api_key_configured: bool,
    pub model: Option<String>,
}

fn entries<T: Serialize + Copy>(all: &[T], label: fn(T) -> &'static str) -> Vec<OptionEntry> {
    all.iter()
        .map(|&item| OptionEntry {
            value: serde_json::to_value(item).unwrap_or_default(),
            label: label(item),
        })
        .collect()
}

/// GET /api/options — Everything the page needs to render the form.
pub async fn get_options(State(app): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        platforms: entries(&Platform::ALL, Platform::label),
        tones: entries(&Tone::ALL, Tone::label),
        content_types: entries(&ContentType::ALL, ContentType::label),
        languages: entries(&Language::ALL, Language::label),
        count: CountRange {
            min: PostCount::MIN,
            max: PostCount::MAX,
            default: PostCount::DEFAULT,
        },
        api_key_configured: app.generator.is_some(),
        model: app.generator.as_ref().map(|g| g.model().to_string()),
    })
}

// ── Generate ─────────────────────────────────────────────────────────

/// 200 body of POST /api/generate.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
    pub message: &'static str,
}

/// Non-200 body of POST /api/generate.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub severity: Severity,
    pub message: String,
    /// Empty required fields, for form errors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<RequiredField>,
}

impl ErrorResponse {
    fn status(err: &GenerateError) -> StatusCode {
        match err {
            GenerateError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            GenerateError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GenerateError::Api(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<GenerateError> for ErrorResponse {
    fn from(err: GenerateError) -> Self {
        let missing = match &err {
            GenerateError::Form(FormError::MissingFields(fields)) => fields.clone(),
            _ => Vec::new(),
        };
        Self {
            severity: err.severity(),
            message: err.to_string(),
            missing,
        }
    }
}

/// POST /api/generate — Run one generation for the submitted form.
///
/// Returns 200 with the content, 422 for blank fields or a malformed body,
/// 503 when no API key is configured, and 502 when the Gemini call fails.
pub async fn post_generate(
    State(app): State<AppState>,
    body: Result<Json<ContentRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("rejected form body: {rejection}");
            let body = ErrorResponse {
                severity: Severity::Warning,
                message: rejection.body_text(),
                missing: Vec::new(),
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }
    };

    match generate_content(app.generator.as_deref(), &request).await {
        Ok(content) => Json(GenerateResponse {
            content: content.text,
            model: content.model,
            message: SUCCESS_MESSAGE,
        })
        .into_response(),
        Err(err) => {
            let status = ErrorResponse::status(&err);
            (status, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_per_variant() {
        assert_eq!(
            ErrorResponse::status(&GenerateError::MissingApiKey),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorResponse::status(&GenerateError::Api("boom".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorResponse::status(&GenerateError::Form(FormError::MissingFields(vec![
                RequiredField::Goal
            ]))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn form_error_lists_missing_fields() {
        let err = GenerateError::Form(FormError::MissingFields(vec![
            RequiredField::BrandDescription,
            RequiredField::Niche,
        ]));
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["missing"][0], "brand_description");
        assert_eq!(json["missing"][1], "niche");
    }

    #[test]
    fn api_error_omits_missing() {
        let json = serde_json::to_value(ErrorResponse::from(GenerateError::Api("quota".into())))
            .unwrap();
        assert_eq!(json["severity"], "error");
        assert!(json.get("missing").is_none());
        assert_eq!(
            json["message"],
            "Something went wrong while calling Gemini API: quota"
        );
    }

    #[test]
    fn option_entries_pair_value_and_label() {
        let platforms = entries(&Platform::ALL, Platform::label);
        assert_eq!(platforms.len(), 5);
        assert_eq!(platforms[2].value, "twitter-x");
        assert_eq!(platforms[2].label, "Twitter/X");
    }
}
