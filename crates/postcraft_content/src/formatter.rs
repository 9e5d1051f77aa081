//! Platform-specific layout.

use postcraft_core::Platform;

const MAX_HASHTAGS: usize = 5;
const MIN_HASHTAG_CHARS: usize = 4;

/// Applies a platform's layout rules to post text.
///
/// Platforms without rules get the text back unchanged. For TikTok,
/// sentence breaks become paragraph breaks and up to five hashtags derived
/// from the text are appended as a final paragraph.
///
/// Pure and total: the same input always produces the same output.
///
/// # Examples
///
/// ```
/// use postcraft_content::format_for_platform;
/// use postcraft_core::Platform;
///
/// let text = "Sleep matters. Rest well";
/// assert_eq!(format_for_platform(text, Platform::Twitter), text);
/// assert_eq!(
///     format_for_platform(text, Platform::TikTok),
///     "Sleep matters.\n\nRest well\n\n#sleep #matters. #rest #well"
/// );
/// ```
pub fn format_for_platform(content: &str, platform: Platform) -> String {
    let Some(rules) = platform.format_rules() else {
        return content.to_string();
    };

    let mut formatted = if *rules.line_breaks() {
        content.split(". ").collect::<Vec<_>>().join(".\n\n")
    } else {
        content.to_string()
    };

    if *rules.hashtag_style() {
        let tags = hashtags(&formatted);
        if !tags.is_empty() {
            formatted.push_str("\n\n");
            formatted.push_str(&tags.join(" "));
        }
    }

    formatted
}

/// Hashtags derived from text.
///
/// Whitespace-separated words longer than three characters, lower-cased and
/// prefixed with `#`, first five in order of appearance. Punctuation stays
/// attached and repeats are kept.
pub fn hashtags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.chars().count() >= MIN_HASHTAG_CHARS)
        .take(MAX_HASHTAGS)
        .map(|word| format!("#{}", word.to_lowercase()))
        .collect()
}
