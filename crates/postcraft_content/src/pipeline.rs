//! The post generation pipeline.

use crate::{build_prompt, format_for_platform, format_long_content};
use postcraft_core::{GeneratedPost, GenerationRequest, Length};
use postcraft_error::{PostcraftResult, RemoteError, RemoteErrorKind};
use postcraft_interface::PostGenerator;
use postcraft_storage::HistoryStore;
use postcraft_templates::TemplateBank;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Number of posts returned by history listings unless asked otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Generates posts and records them in the history.
///
/// Remote failures never reach the caller: text falls back to the
/// [`TemplateBank`] and image ideas fall back to the topic-based pool.
/// The history store sits behind an async mutex so concurrent
/// generations append without losing entries.
pub struct ContentPipeline<G: PostGenerator> {
    generator: G,
    templates: TemplateBank,
    history: Mutex<HistoryStore>,
}

impl<G: PostGenerator> ContentPipeline<G> {
    /// Creates a pipeline from its three collaborators.
    pub fn new(generator: G, templates: TemplateBank, history: HistoryStore) -> Self {
        Self {
            generator,
            templates,
            history: Mutex::new(history),
        }
    }

    /// The remote generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates one post and appends it to the history.
    ///
    /// Failing to write the history file is logged; the post is still
    /// returned and kept in memory.
    #[instrument(
        skip(self, request),
        fields(
            topic = %request.topic,
            length = %request.length,
            platform = %request.platform,
            language = %request.language,
            provider = self.generator.provider_name(),
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> PostcraftResult<GeneratedPost> {
        let body = self.post_body(request).await;

        let mut content = format_for_platform(&body, request.platform);
        if let Some(rules) = request.platform.format_rules() {
            if rules.exceeds_max_length(&content) {
                warn!(
                    chars = content.chars().count(),
                    max_length = *rules.max_length(),
                    "Formatted post exceeds platform length limit"
                );
            }
        }

        let cta = self.templates.cta_for(request.language, request.platform);
        if !cta.is_empty() {
            content.push_str("\n\n");
            content.push_str(&cta);
        }

        let image_suggestions = self.image_suggestions(request).await;
        let post = GeneratedPost::new(content, image_suggestions, request.clone());

        let mut history = self.history.lock().await;
        if let Err(e) = history.append(post.clone()).await {
            warn!(error = %e, path = %history.path().display(), "Failed to persist history");
        }

        info!(chars = post.content().chars().count(), "Generated post");
        Ok(post)
    }

    /// The last `limit` posts, oldest first.
    pub async fn history(&self, limit: usize) -> Vec<GeneratedPost> {
        self.history.lock().await.recent(limit).to_vec()
    }

    /// Removes every post from the history.
    #[instrument(skip(self))]
    pub async fn clear_history(&self) -> PostcraftResult<()> {
        self.history.lock().await.clear().await
    }

    /// Remote text, or template text when the call fails; long posts reflowed.
    async fn post_body(&self, request: &GenerationRequest) -> String {
        let prompt = build_prompt(request);
        debug!(
            max_tokens = *prompt.max_tokens(),
            timeout_secs = prompt.timeout().as_secs(),
            model = self.generator.model_name(),
            "Requesting post text"
        );

        let text = match self.generator.generate_text(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("Remote returned empty text, using template");
                self.fallback_text(request)
            }
            Err(e) => {
                log_fallback("text", &e);
                self.fallback_text(request)
            }
        };

        match request.length {
            Length::Long => format_long_content(&text),
            Length::Short | Length::Medium => text,
        }
    }

    fn fallback_text(&self, request: &GenerationRequest) -> String {
        self.templates
            .sample(&request.topic, request.length, request.language)
    }

    async fn image_suggestions(&self, request: &GenerationRequest) -> [String; 2] {
        match self
            .generator
            .generate_image_suggestions(&request.topic, &request.tone)
            .await
        {
            Ok(suggestions) => {
                let mut lines = suggestions.into_iter().filter(|s| !s.trim().is_empty());
                match (lines.next(), lines.next()) {
                    (Some(first), Some(second)) => [first, second],
                    _ => {
                        warn!("Remote returned fewer than two image ideas, using fallback");
                        self.templates.image_suggestion_fallback(&request.topic)
                    }
                }
            }
            Err(e) => {
                log_fallback("image suggestions", &e);
                self.templates.image_suggestion_fallback(&request.topic)
            }
        }
    }
}

fn log_fallback(what: &str, error: &RemoteError) {
    let kind = error.kind.label();
    match &error.kind {
        RemoteErrorKind::Timeout { seconds } => {
            warn!(what, kind, seconds, "Remote call timed out, using fallback");
        }
        RemoteErrorKind::Http {
            status_code,
            message,
        } => {
            warn!(what, kind, status_code, %message, "Remote call rejected, using fallback");
        }
        RemoteErrorKind::Transport(message) => {
            warn!(what, kind, %message, "Remote call failed, using fallback");
        }
        RemoteErrorKind::MalformedResponse(message) => {
            warn!(what, kind, %message, "Remote response unusable, using fallback");
        }
        RemoteErrorKind::InvalidRequest(message) => {
            warn!(what, kind, %message, "Remote request not sent, using fallback");
        }
    }
}
