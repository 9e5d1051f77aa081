//! Platform layout rules.

use serde::{Deserialize, Serialize};

/// Layout rules a platform's captions follow.
///
/// Only `line_breaks` and `hashtag_style` change the text. `max_length` is
/// checked after formatting and reported, never enforced by truncation.
/// `emojis_per_line` is carried as platform metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlatformFormatRules {
    /// Caption character limit.
    max_length: usize,

    /// Append derived hashtags as a trailing paragraph.
    hashtag_style: bool,

    /// Emoji density the platform favours.
    emojis_per_line: u32,

    /// Turn sentence breaks into paragraph breaks.
    line_breaks: bool,
}

impl PlatformFormatRules {
    /// Creates a rule set.
    pub fn new(
        max_length: usize,
        hashtag_style: bool,
        emojis_per_line: u32,
        line_breaks: bool,
    ) -> Self {
        Self {
            max_length,
            hashtag_style,
            emojis_per_line,
            line_breaks,
        }
    }

    /// Returns true when `text` is longer than the caption limit, counted in chars.
    pub fn exceeds_max_length(&self, text: &str) -> bool {
        text.chars().count() > self.max_length
    }
}
