//! OpenAI-compatible chat-completions wire types.

use serde::{Deserialize, Serialize};

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "0.5")]
    pub temperature: f32,
    /// Penalty for introducing already-seen topics
    #[builder(default = "0.6")]
    pub presence_penalty: f32,
    /// Penalty for repeating tokens
    #[builder(default = "0.3")]
    pub frequency_penalty: f32,
}

impl ChatRequest {
    /// Creates a new request builder.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions response body. Only the fields the client reads.
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct ChatResponse {
    /// Completion choices
    #[serde(default)]
    choices: Vec<Choice>,
    /// Token accounting, when the provider reports it
    #[serde(default)]
    usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, trimmed. `None` when absent or blank.
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    }
}

/// A completion choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ResponseMessage,
}

/// Message returned inside a choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage {
    /// Message content; some providers send `null`
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_sampling_defaults() {
        let request = ChatRequest::builder()
            .model("m")
            .messages(vec![ChatMessage::system("s"), ChatMessage::user("u")])
            .max_tokens(400u32)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 400);
        assert_eq!(json["temperature"], 0.5);
        assert!((json["presence_penalty"].as_f64().unwrap() - 0.6).abs() < 1e-6);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "u");
    }

    #[test]
    fn first_content_is_trimmed() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Hello there \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content().as_deref(), Some("Hello there"));
        assert!(response.usage().is_none());
    }

    #[test]
    fn null_or_missing_content_is_none() {
        let null: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(null.first_content().is_none());
        assert!(empty.first_content().is_none());
    }
}
