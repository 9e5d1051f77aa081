//! Request option enums: length tier, platform and language.

use crate::{LengthBudget, PlatformFormatRules};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::Display;
use std::str::FromStr;

/// Coarse size category controlling token budget, timeout and word target.
///
/// # Examples
///
/// ```
/// use postcraft_core::Length;
///
/// let length: Length = "Long".parse().unwrap();
/// assert_eq!(length, Length::Long);
/// assert_eq!(length.to_string(), "long");
/// assert_eq!(*length.budget().max_tokens(), 2000);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Length {
    /// A hook line or two
    Short,
    /// A few short paragraphs
    #[default]
    Medium,
    /// A structured multi-paragraph post
    Long,
}

impl Length {
    /// Timeout and token budget for the remote call.
    pub fn budget(self) -> LengthBudget {
        match self {
            Length::Short => LengthBudget::new(30, 400),
            Length::Medium => LengthBudget::new(60, 1200),
            Length::Long => LengthBudget::new(90, 2000),
        }
    }

    /// Word-count target embedded in the prompt.
    pub fn word_target(self) -> &'static str {
        match self {
            Length::Short => "30-60 words",
            Length::Medium => "100-150 words",
            Length::Long => "250-350 words",
        }
    }
}

/// Target social network.
///
/// # Examples
///
/// ```
/// use postcraft_core::Platform;
///
/// let platform: Platform = "tiktok".parse().unwrap();
/// assert_eq!(platform, Platform::TikTok);
/// assert_eq!(platform.to_string(), "TikTok");
/// assert!(platform.format_rules().is_some());
/// assert!(Platform::LinkedIn.format_rules().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// TikTok captions
    #[default]
    TikTok,
    /// Facebook posts
    Facebook,
    /// Instagram captions
    Instagram,
    /// LinkedIn posts
    LinkedIn,
    /// Twitter / X posts
    Twitter,
}

impl Platform {
    /// Layout rules for this platform, if it has any.
    pub fn format_rules(self) -> Option<PlatformFormatRules> {
        match self {
            Platform::TikTok => Some(PlatformFormatRules::new(150, true, 2, true)),
            Platform::Facebook | Platform::Instagram | Platform::LinkedIn | Platform::Twitter => {
                None
            }
        }
    }
}

/// Output language.
///
/// Serialized with the short codes `EN` and `BM`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "EN")]
    #[strum(serialize = "EN")]
    English,
    /// Bahasa Malaysia
    #[serde(rename = "BM")]
    #[strum(serialize = "BM")]
    Malay,
}

impl Language {
    /// Instruction line telling the model which language to write in.
    pub fn directive(self) -> &'static str {
        match self {
            Language::English => "Write in English",
            Language::Malay => "Write in Bahasa Malaysia",
        }
    }

    /// Human-readable language name used inside prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Malay => "Bahasa Malaysia",
        }
    }
}

/// Reads an option from its string form, ignoring ASCII case.
///
/// History files written by hand or by older tools carry values such as
/// `"facebook"` or `"Short"`.
fn deserialize_case_insensitive<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|e| de::Error::custom(format!("`{}`: {}", raw, e)))
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_case_insensitive(deserializer)
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_case_insensitive(deserializer)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_case_insensitive(deserializer)
    }
}
