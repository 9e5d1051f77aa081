//! Text and JSON rendering of posts for the command line.

use postcraft_core::GeneratedPost;
use postcraft_error::{JsonError, PostcraftResult};

/// One generated post with its image ideas.
pub fn render_post(post: &GeneratedPost) -> String {
    let metadata = post.metadata();
    let mut out = format!(
        "📝 Generated Post [{}]\n\n{}\n\n🖼️ Image Suggestions\n",
        metadata.language,
        post.content()
    );
    for (i, suggestion) in post.image_suggestions().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    out
}

/// A history entry: content followed by a metadata line.
///
/// ```
/// use postcraft::{GeneratedPost, GenerationRequest, render_history_entry};
///
/// let request = GenerationRequest::parse("sleep", "short", "TikTok", "Casual", "EN").unwrap();
/// let post = GeneratedPost::with_timestamp(
///     "Rest up.".to_string(),
///     ["a".to_string(), "b".to_string()],
///     "2024-05-01T09:30:15.123456".to_string(),
///     request,
/// );
///
/// let entry = render_history_entry(&post);
/// assert!(entry.ends_with(
///     "Topic: sleep | Platform: TikTok | Length: short | Tone: Casual | Language: EN | Generated: 2024-05-01 09:30:15"
/// ));
/// ```
pub fn render_history_entry(post: &GeneratedPost) -> String {
    let metadata = post.metadata();
    let generated = post
        .generated_at()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| post.timestamp().clone());

    format!(
        "{}\n\nTopic: {} | Platform: {} | Length: {} | Tone: {} | Language: {} | Generated: {}",
        post.content(),
        metadata.topic,
        metadata.platform,
        metadata.length,
        metadata.tone,
        metadata.language,
        generated
    )
}

/// A full history listing, oldest first.
pub fn render_history(posts: &[GeneratedPost]) -> String {
    if posts.is_empty() {
        return "No posts generated yet. Start creating some posts!".to_string();
    }

    let separator = format!("\n{:-<80}\n", "");
    posts
        .iter()
        .map(render_history_entry)
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Pretty JSON for any serializable value.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> PostcraftResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(JsonError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::GenerationRequest;

    fn post() -> GeneratedPost {
        let request = GenerationRequest::parse("focus", "medium", "Twitter", "Friendly", "BM").unwrap();
        GeneratedPost::with_timestamp(
            "Fokus itu penting.".to_string(),
            ["Meja kerja kemas".to_string(), "Jam di dinding".to_string()],
            "2024-06-10T21:05:00.000001+08:00".to_string(),
            request,
        )
    }

    #[test]
    fn post_lists_numbered_suggestions() {
        let text = render_post(&post());
        assert!(text.starts_with("📝 Generated Post [BM]\n\nFokus itu penting."));
        assert!(text.contains("1. Meja kerja kemas\n2. Jam di dinding\n"));
    }

    #[test]
    fn history_entry_formats_offset_timestamp() {
        let entry = render_history_entry(&post());
        assert!(entry.ends_with("Language: BM | Generated: 2024-06-10 21:05:00"));
    }

    #[test]
    fn unparseable_timestamp_is_shown_raw() {
        let request = GenerationRequest::parse("x", "short", "Twitter", "Calm", "EN").unwrap();
        let post = GeneratedPost::with_timestamp(
            "Body".to_string(),
            ["a".to_string(), "b".to_string()],
            "yesterday".to_string(),
            request,
        );
        assert!(render_history_entry(&post).ends_with("Generated: yesterday"));
    }

    #[test]
    fn empty_history_has_hint() {
        assert!(render_history(&[]).starts_with("No posts generated yet"));
    }

    #[test]
    fn json_keeps_field_names() {
        let json = to_json(&post()).unwrap();
        assert!(json.contains("\"image_suggestions\""));
        assert!(json.contains("\"language\": \"BM\""));
    }
}
