//! Closed option sets offered by the content settings form.
//!
//! Every enum's [`label`](Platform::label) is the exact text shown in the
//! dropdown and interpolated into the prompt. Wire names (serde and clap)
//! are kebab-case.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Social network the content is written for.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Instagram,
    #[value(name = "linkedin")]
    #[serde(rename = "linkedin")]
    LinkedIn,
    TwitterX,
    #[value(name = "youtube")]
    #[serde(rename = "youtube")]
    YouTube,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::LinkedIn,
        Platform::TwitterX,
        Platform::YouTube,
        Platform::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::TwitterX => "Twitter/X",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
        }
    }
}

/// Tone of voice.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Humorous,
    Inspirational,
    Bold,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Casual,
        Tone::Professional,
        Tone::Humorous,
        Tone::Inspirational,
        Tone::Bold,
        Tone::Friendly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
            Tone::Inspirational => "Inspirational",
            Tone::Bold => "Bold",
            Tone::Friendly => "Friendly",
        }
    }
}

/// Shape of the content to generate.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    SinglePostCaptions,
    CarouselIdeas,
    ShortVideoIdeas,
    Thread,
    WeeklyContentPlan,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::SinglePostCaptions,
        ContentType::CarouselIdeas,
        ContentType::ShortVideoIdeas,
        ContentType::Thread,
        ContentType::WeeklyContentPlan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentType::SinglePostCaptions => "Single Post Captions",
            ContentType::CarouselIdeas => "Carousel Ideas",
            ContentType::ShortVideoIdeas => "Short Video/Reel Ideas",
            ContentType::Thread => "Thread / LinkedIn Post",
            ContentType::WeeklyContentPlan => "Weekly Content Plan",
        }
    }
}

/// Language the model must write in.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
    Tamil,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Kannada,
        Language::Tamil,
        Language::Telugu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
        }
    }
}

macro_rules! display_as_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_as_label!(Platform, Tone, ContentType, Language);

// ── PostCount ──────────────────────────────────────────────────────

/// Slider value out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("number of ideas must be between {min} and {max}, got {value}", min = PostCount::MIN, max = PostCount::MAX)]
pub struct PostCountError {
    pub value: u8,
}

/// Number of post ideas / captions requested. Always within
/// [`PostCount::MIN`]..=[`PostCount::MAX`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct PostCount(u8);

impl PostCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 5;

    pub fn new(value: u8) -> Result<Self, PostCountError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PostCountError { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PostCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for PostCount {
    type Error = PostCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostCount> for u8 {
    fn from(count: PostCount) -> Self {
        count.0
    }
}

impl fmt::Display for PostCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
