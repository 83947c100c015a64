//! The user's selections for a single generation request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::{ContentType, Language, Platform, PostCount, Tone};

/// A required free-text field of the form.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    BrandDescription,
    Niche,
    Goal,
}

impl RequiredField {
    /// Form label of the field.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::BrandDescription => "Describe your brand or client",
            RequiredField::Niche => "Niche / Industry",
            RequiredField::Goal => "Goal of this content",
        }
    }
}

/// Local validation failure. Blocks the API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more required text fields are empty. Listed in form order.
    #[error("Please fill all fields before generating content.")]
    MissingFields(Vec<RequiredField>),
}

/// Immutable snapshot of the form for one request.
///
/// Option fields default to the first dropdown entry when absent from the
/// JSON body; text fields default to empty and are caught by
/// [`validate`](Self::validate).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContentRequest {
    platform: Platform,
    tone: Tone,
    content_type: ContentType,
    language: Language,
    count: PostCount,
    brand_description: String,
    niche: String,
    goal: String,
}

impl ContentRequest {
    /// Build a request from the three free-text fields, with every option at
    /// its default. Use the `with_*` setters to pick the rest.
    pub fn new(
        brand_description: impl Into<String>,
        niche: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            brand_description: brand_description.into(),
            niche: niche.into(),
            goal: goal.into(),
            ..Default::default()
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_count(mut self, count: PostCount) -> Self {
        self.count = count;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn count(&self) -> PostCount {
        self.count
    }

    pub fn brand_description(&self) -> &str {
        &self.brand_description
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Required text fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::BrandDescription, &self.brand_description),
            (RequiredField::Niche, &self.niche),
            (RequiredField::Goal, &self.goal),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Reject the request if any required text field is blank.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe() -> ContentRequest {
        ContentRequest::new(
            "A small café in Bangalore that sells handcrafted coffee",
            "Café",
            "Promote a Diwali offer",
        )
    }

    #[test]
    fn complete_request_validates() {
        assert_eq!(cafe().validate(), Ok(()));
    }

    #[test]
    fn each_blank_field_is_rejected() {
        let req = ContentRequest::new("", "Café", "Grow followers");
        assert_eq!(
            req.validate(),
            Err(FormError::MissingFields(vec![RequiredField::BrandDescription]))
        );

        let req = ContentRequest::new("Brand", "", "Grow followers");
        assert_eq!(req.missing_fields(), vec![RequiredField::Niche]);

        let req = ContentRequest::new("Brand", "Café", "");
        assert_eq!(req.missing_fields(), vec![RequiredField::Goal]);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let req = ContentRequest::new("  \n\t", "Café", "   ");
        assert_eq!(
            req.missing_fields(),
            vec![RequiredField::BrandDescription, RequiredField::Goal]
        );
    }

    #[test]
    fn error_message_matches_form_warning() {
        let err = ContentRequest::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill all fields before generating content."
        );
    }

    #[test]
    fn field_labels_match_form_inputs() {
        assert_eq!(
            RequiredField::BrandDescription.label(),
            "Describe your brand or client"
        );
        assert_eq!(RequiredField::Niche.label(), "Niche / Industry");
        assert_eq!(RequiredField::Goal.label(), "Goal of this content");
    }

    #[test]
    fn builder_setters_apply() {
        let req = cafe()
            .with_platform(Platform::LinkedIn)
            .with_tone(Tone::Bold)
            .with_content_type(ContentType::Thread)
            .with_language(Language::Tamil)
            .with_count(PostCount::new(3).unwrap());
        assert_eq!(req.platform(), Platform::LinkedIn);
        assert_eq!(req.tone(), Tone::Bold);
        assert_eq!(req.content_type(), ContentType::Thread);
        assert_eq!(req.language(), Language::Tamil);
        assert_eq!(req.count().get(), 3);
        assert_eq!(req.niche(), "Café");
    }

    #[test]
    fn deserializes_partial_form_body() {
        let json = r#"{"platform":"twitter-x","count":2,"brand_description":"Gym","niche":"Fitness","goal":"Launch"}"#;
        let req: ContentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.platform(), Platform::TwitterX);
        assert_eq!(req.tone(), Tone::Casual);
        assert_eq!(req.count().get(), 2);
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn out_of_range_count_fails_to_deserialize() {
        let json = r#"{"count":0,"brand_description":"a","niche":"b","goal":"c"}"#;
        assert!(serde_json::from_str::<ContentRequest>(json).is_err());
    }
}
