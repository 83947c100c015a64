//! Convenience re-exports for common `contentcraft` types.
//!
//! ```ignore
//! use contentcraft::prelude::*;
//! ```

pub use crate::config::AppConfig;
pub use crate::gemini::GeminiClient;
pub use crate::generate::{
    GenerateError, GeneratedContent, SUCCESS_MESSAGE, Severity, TextGenerator, generate_content,
};
pub use crate::options::{ContentType, Language, Platform, PostCount, Tone};
pub use crate::prompt::{build_prompt, checked_prompt};
pub use crate::request::{ContentRequest, FormError, RequiredField};
pub use crate::init_tracing;
