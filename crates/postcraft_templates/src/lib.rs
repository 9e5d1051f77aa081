//! Fallback post templates and call-to-action copy for Postcraft.
//!
//! The template bank is read-only data. Randomness only enters through the
//! injected [`RandomSource`] when a template or call-to-action is chosen.
//!
//! # Example
//!
//! ```
//! use postcraft_core::{Language, Length, Platform};
//! use postcraft_interface::FixedIndex;
//! use postcraft_templates::TemplateBank;
//! use std::sync::Arc;
//!
//! let bank = TemplateBank::new(Arc::new(FixedIndex(1)));
//!
//! let text = bank.sample("focus", Length::Short, Language::English);
//! assert_eq!(text, "💡 Want to master focus? Start with this...");
//!
//! let cta = bank.cta_for(Language::English, Platform::Twitter);
//! assert_eq!(cta, "Like & follow for more!");
//!
//! let [first, second] = bank.image_suggestion_fallback("focus");
//! assert!(first.contains("focus") && second.contains("focus"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod copy;

use postcraft_core::{Language, Length, Platform};
use postcraft_interface::RandomSource;
use std::collections::BTreeMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Call-to-action lines keyed by language, then platform.
///
/// A platform without its own list borrows its language's Facebook list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaTable {
    entries: BTreeMap<Language, BTreeMap<Platform, Vec<String>>>,
}

impl CtaTable {
    /// An empty table. Lookups against it return no candidates.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The built-in lines for every language and platform.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for language in Language::iter() {
            for platform in Platform::iter() {
                let lines = copy::builtin_ctas(language, platform)
                    .iter()
                    .map(|line| line.to_string())
                    .collect();
                table = table.with_entry(language, platform, lines);
            }
        }
        table
    }

    /// Sets the lines for one language and platform.
    pub fn with_entry(mut self, language: Language, platform: Platform, lines: Vec<String>) -> Self {
        self.entries
            .entry(language)
            .or_default()
            .insert(platform, lines);
        self
    }

    /// Removes a platform's dedicated list so it falls back to Facebook.
    pub fn without_entry(mut self, language: Language, platform: Platform) -> Self {
        if let Some(platforms) = self.entries.get_mut(&language) {
            platforms.remove(&platform);
        }
        self
    }

    /// Candidate lines for a language and platform after fallback.
    pub fn candidates(&self, language: Language, platform: Platform) -> &[String] {
        let Some(platforms) = self.entries.get(&language) else {
            return &[];
        };
        platforms
            .get(&platform)
            .filter(|lines| !lines.is_empty())
            .or_else(|| platforms.get(&Platform::Facebook))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for CtaTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Static fallback content with injected selection randomness.
#[derive(Clone)]
pub struct TemplateBank {
    random: Arc<dyn RandomSource>,
    ctas: CtaTable,
}

impl std::fmt::Debug for TemplateBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateBank")
            .field("ctas", &self.ctas)
            .finish_non_exhaustive()
    }
}

impl TemplateBank {
    /// Creates a bank over the built-in copy.
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_cta_table(random, CtaTable::builtin())
    }

    /// Creates a bank with a custom call-to-action table.
    pub fn with_cta_table(random: Arc<dyn RandomSource>, ctas: CtaTable) -> Self {
        Self { random, ctas }
    }

    /// Picks fallback post text for a tier.
    ///
    /// Short and medium draw one template. Long joins two independently
    /// drawn medium templates with a blank line; paragraph reflow is left to
    /// the caller so it runs once for every long post.
    ///
    /// Tone plays no part in the choice.
    #[tracing::instrument(skip(self, length, language), fields(length = %length, language = %language))]
    pub fn sample(&self, topic: &str, length: Length, language: Language) -> String {
        let pool = copy::post_templates(length, language);
        let first = copy::render(pool[self.random.pick(pool.len())], topic);

        match length {
            Length::Short | Length::Medium => first,
            Length::Long => {
                let second = copy::render(pool[self.random.pick(pool.len())], topic);
                format!("{}\n\n{}", first, second)
            }
        }
    }

    /// Picks a call-to-action line.
    ///
    /// Returns an empty string only if the table has no lines for the
    /// language at all, which the built-in table never does.
    pub fn cta_for(&self, language: Language, platform: Platform) -> String {
        let candidates = self.ctas.candidates(language, platform);
        if candidates.is_empty() {
            tracing::warn!(%language, %platform, "No call-to-action lines available");
            return String::new();
        }
        candidates[self.random.pick(candidates.len())].clone()
    }

    /// Two distinct topic-parameterized image ideas.
    pub fn image_suggestion_fallback(&self, topic: &str) -> [String; 2] {
        let (first, second) = self.random.pick_two(copy::IMAGE_SUGGESTIONS.len());
        [
            copy::render(copy::IMAGE_SUGGESTIONS[first], topic),
            copy::render(copy::IMAGE_SUGGESTIONS[second], topic),
        ]
    }

    /// The call-to-action table in use.
    pub fn cta_table(&self) -> &CtaTable {
        &self.ctas
    }
}

/// Every rendered template the bank can draw for a tier.
///
/// Long tiers list the medium pool they are assembled from.
pub fn rendered_templates(topic: &str, length: Length, language: Language) -> Vec<String> {
    copy::post_templates(length, language)
        .iter()
        .map(|template| copy::render(template, topic))
        .collect()
}

/// Every rendered image idea the fallback can return.
pub fn rendered_image_suggestions(topic: &str) -> Vec<String> {
    copy::IMAGE_SUGGESTIONS
        .iter()
        .map(|template| copy::render(template, topic))
        .collect()
}
