//! OpenRouter client implementation.

use super::dto::ChatRequestBuilderError;
use super::{ChatMessage, ChatRequest, ChatResponse, ClientConfig};
use async_trait::async_trait;
use postcraft_core::{LengthBudget, PromptContext};
use postcraft_error::{ConfigError, PostcraftResult, RemoteError, RemoteErrorKind};
use postcraft_interface::PostGenerator;
use std::time::Duration;
use tracing::{debug, error, instrument};

const IMAGE_SYSTEM_PROMPT: &str = "You are an art director who suggests photographs and \
illustrations for social media posts. Describe each image in one plain sentence.";

/// Client for OpenRouter's chat-completions API.
///
/// Each call is one request with its own timeout. Cloning is cheap; clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OpenRouterClient {
    /// Creates a client. A blank API key is a configuration error.
    #[instrument(skip(config), fields(api_base = %config.settings().api_base, model = %config.settings().text_model))]
    pub fn new(config: ClientConfig) -> PostcraftResult<Self> {
        if config.api_key().trim().is_empty() {
            return Err(ConfigError::missing_env(super::config::API_KEY_ENV).into());
        }
        debug!("Creating OpenRouter client");
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one chat-completions request and returns the trimmed content.
    #[instrument(skip(self, request), fields(model = %request.model, max_tokens = request.max_tokens))]
    async fn complete(&self, request: &ChatRequest, timeout: Duration) -> Result<String, RemoteError> {
        let url = self.config.completions_url();
        let seconds = timeout.as_secs();
        let settings = self.config.settings();
        debug!(%url, seconds, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .header("HTTP-Referer", &settings.referer)
            .header("X-Title", &settings.title)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e, seconds))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            error!(status = status.as_u16(), %message, "Provider returned error");
            return Err(RemoteError::new(RemoteErrorKind::Http {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, seconds))?;

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            RemoteError::new(RemoteErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if let Some(usage) = parsed.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Token usage"
            );
        }

        parsed.first_content().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::MalformedResponse(
                "Response has no content".to_string(),
            ))
        })
    }

    fn build_request(
        &self,
        model: &str,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<ChatRequest, RemoteError> {
        ChatRequest::builder()
            .model(model)
            .messages(vec![ChatMessage::system(system), ChatMessage::user(user)])
            .max_tokens(max_tokens)
            .build()
            .map_err(request_error)
    }
}

fn request_error(error: ChatRequestBuilderError) -> RemoteError {
    error!(error = %error, "Failed to build chat request");
    RemoteError::new(RemoteErrorKind::InvalidRequest(error.to_string()))
}

#[async_trait]
impl PostGenerator for OpenRouterClient {
    #[instrument(skip(self, prompt), fields(max_tokens = *prompt.max_tokens()))]
    async fn generate_text(&self, prompt: &PromptContext) -> Result<String, RemoteError> {
        let request = self.build_request(
            &self.config.settings().text_model,
            prompt.system(),
            prompt.user(),
            *prompt.max_tokens(),
        )?;
        self.complete(&request, *prompt.timeout()).await
    }

    #[instrument(skip(self))]
    async fn generate_image_suggestions(
        &self,
        topic: &str,
        tone: &str,
    ) -> Result<Vec<String>, RemoteError> {
        let settings = self.config.settings();
        let budget = LengthBudget::new(settings.image_timeout_secs, settings.image_max_tokens);
        let user = format!(
            "Suggest two images for a {} social media post about {}. \
             Reply with exactly two lines, one image description per line, \
             with no numbering and no other text.",
            tone.to_lowercase(),
            topic
        );
        let request =
            self.build_request(&settings.image_model, IMAGE_SYSTEM_PROMPT, &user, *budget.max_tokens())?;

        let text = self.complete(&request, budget.timeout()).await?;
        let suggestions = parse_suggestions(&text);
        if suggestions.len() < 2 {
            return Err(RemoteError::new(RemoteErrorKind::MalformedResponse(format!(
                "Expected two image suggestions, got {}",
                suggestions.len()
            ))));
        }
        Ok(suggestions)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        &self.config.settings().text_model
    }
}

fn transport_error(e: reqwest::Error, seconds: u64) -> RemoteError {
    if e.is_timeout() {
        error!(seconds, "Request timed out");
        RemoteError::new(RemoteErrorKind::Timeout { seconds })
    } else {
        error!(error = %e, "Request failed");
        RemoteError::new(RemoteErrorKind::Transport(e.to_string()))
    }
}

/// First two non-blank lines of a suggestion reply, list markers removed.
///
/// # Examples
///
/// ```
/// use postcraft_models::parse_suggestions;
///
/// let lines = parse_suggestions("1. A runner at dawn\n\n- A pair of shoes\n* extra");
/// assert_eq!(lines, vec!["A runner at dawn", "A pair of shoes"]);
/// ```
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(2)
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return rest.trim();
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_common_markers() {
        assert_eq!(strip_list_marker("- dash"), "dash");
        assert_eq!(strip_list_marker("* star"), "star");
        assert_eq!(strip_list_marker("2) paren"), "paren");
        assert_eq!(strip_list_marker("10. dotted"), "dotted");
        assert_eq!(strip_list_marker("   plain  "), "plain");
    }

    #[test]
    fn numbers_without_marker_are_kept() {
        assert_eq!(strip_list_marker("3 friends hiking"), "3 friends hiking");
        assert_eq!(strip_list_marker("2024 calendar"), "2024 calendar");
    }

    #[test]
    fn bare_marker_lines_are_dropped() {
        assert_eq!(parse_suggestions("1.\nA desk\n-\nA lamp"), vec!["A desk", "A lamp"]);
    }

    #[test]
    fn single_line_yields_one() {
        assert_eq!(parse_suggestions("Only one idea").len(), 1);
    }

    #[test]
    fn incomplete_request_is_not_a_transport_error() {
        let err = request_error(ChatRequest::builder().max_tokens(10u32).build().unwrap_err());
        assert!(matches!(err.kind, RemoteErrorKind::InvalidRequest(_)));
        assert_eq!(err.kind.label(), "invalid_request");
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = OpenRouterClient::new(ClientConfig::new("   ")).unwrap_err();
        assert!(err.is_config());
    }
}
