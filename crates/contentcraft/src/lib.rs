//! Social media content generation on top of the Gemini API.
//!
//! `contentcraft` turns a handful of form fields (platform, tone, content
//! type, language, brand description, niche, goal, and how many ideas to
//! produce) into a content-strategist prompt, sends it to Gemini, and hands
//! back the generated text. Both the `contentcraft` CLI and the
//! `contentcraft-web` form are thin surfaces over [`generate_content`].
//!
//! # Getting started
//!
//! ```ignore
//! use contentcraft::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     let config = AppConfig::from_env();
//!     let client = config.generator()?;
//!
//!     let request = ContentRequest::new(
//!         "A small café in Bangalore that sells handcrafted coffee",
//!         "Café",
//!         "Promote a Diwali offer",
//!     )
//!     .with_platform(Platform::Instagram)
//!     .with_count(PostCount::new(3).map_err(|e| e.to_string())?);
//!
//!     let content = generate_content(
//!         client.as_ref().map(|c| c as &dyn TextGenerator),
//!         &request,
//!     )
//!     .await
//!     .map_err(|e| e.to_string())?;
//!     println!("{}", content.text);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`options`] | Dropdown and slider values |
//! | [`request`] | [`ContentRequest`](request::ContentRequest) value object and field validation |
//! | [`prompt`] | [`build_prompt`](prompt::build_prompt) |
//! | [`gemini`] | [`GeminiClient`](gemini::GeminiClient) for `generateContent` |
//! | [`generate`] | [`TextGenerator`](generate::TextGenerator) seam and the submit flow |
//! | [`config`] | [`AppConfig`](config::AppConfig) from the environment |

pub mod config;
pub mod gemini;
pub mod generate;
pub mod options;
pub mod prelude;
pub mod prompt;
pub mod request;

pub use generate::{GenerateError, GeneratedContent, TextGenerator, generate_content};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ── Constants ──────────────────────────────────────────────────────

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model for all generation calls.
pub const DEFAULT_MODEL: &str = "models/gemini-flash-latest";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// ── Logging ────────────────────────────────────────────────────────

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
