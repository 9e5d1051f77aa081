//! Generated post type.

use crate::GenerationRequest;
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

/// A finished post as returned to the caller and stored in history.
///
/// Immutable once created. The timestamp is taken once, from the local clock,
/// when the post is assembled.
///
/// # Examples
///
/// ```
/// use postcraft_core::{GeneratedPost, GenerationRequest};
///
/// let request = GenerationRequest::parse("focus", "short", "Twitter", "Friendly", "EN").unwrap();
/// let post = GeneratedPost::new(
///     "Stay on task.".to_string(),
///     ["A tidy desk".to_string(), "A closed laptop".to_string()],
///     request,
/// );
///
/// assert_eq!(post.content(), "Stay on task.");
/// assert_eq!(post.image_suggestions().len(), 2);
/// assert!(post.generated_at().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedPost {
    /// Final post text including CTA.
    content: String,

    /// Exactly two image ideas.
    image_suggestions: [String; 2],

    /// ISO-8601 generation instant.
    timestamp: String,

    /// The request that produced this post.
    metadata: GenerationRequest,
}

impl GeneratedPost {
    /// Assembles a post stamped with the current local time.
    pub fn new(
        content: String,
        image_suggestions: [String; 2],
        metadata: GenerationRequest,
    ) -> Self {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Micros, false);
        Self::with_timestamp(content, image_suggestions, timestamp, metadata)
    }

    /// Assembles a post with an explicit timestamp.
    pub fn with_timestamp(
        content: String,
        image_suggestions: [String; 2],
        timestamp: String,
        metadata: GenerationRequest,
    ) -> Self {
        Self {
            content,
            image_suggestions,
            timestamp,
            metadata,
        }
    }

    /// Wall-clock generation time, if the timestamp parses.
    ///
    /// Accepts RFC 3339 timestamps and offset-less ISO-8601 ones as written
    /// by older history files.
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }
}
