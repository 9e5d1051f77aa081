//! Scripted post generator for testing.

use async_trait::async_trait;
use postcraft_core::PromptContext;
use postcraft_error::{RemoteError, RemoteErrorKind};
use postcraft_interface::PostGenerator;
use std::sync::{Arc, Mutex};

/// How a mock call responds.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Always return this value
    Success(T),
    /// Always fail with this error
    Error(RemoteErrorKind),
}

/// Mock generator with call counting and prompt capture.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    text: MockBehavior<String>,
    images: MockBehavior<Vec<String>>,
    text_calls: Arc<Mutex<usize>>,
    image_calls: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<PromptContext>>>,
}

#[allow(dead_code)]
impl MockGenerator {
    /// A generator whose every call fails with the given error.
    pub fn failing(error: RemoteErrorKind) -> Self {
        Self::new(MockBehavior::Error(error.clone()), MockBehavior::Error(error))
    }

    /// A generator that times out on every call.
    pub fn timing_out() -> Self {
        Self::failing(RemoteErrorKind::Timeout { seconds: 30 })
    }

    /// A generator that succeeds with fixed text and image ideas.
    pub fn succeeding(text: impl Into<String>, images: &[&str]) -> Self {
        Self::new(
            MockBehavior::Success(text.into()),
            MockBehavior::Success(images.iter().map(|s| s.to_string()).collect()),
        )
    }

    /// A generator with independent text and image behavior.
    pub fn new(text: MockBehavior<String>, images: MockBehavior<Vec<String>>) -> Self {
        Self {
            text,
            images,
            text_calls: Arc::new(Mutex::new(0)),
            image_calls: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of text calls made.
    pub fn text_calls(&self) -> usize {
        *self.text_calls.lock().unwrap()
    }

    /// Number of image-suggestion calls made.
    pub fn image_calls(&self) -> usize {
        *self.image_calls.lock().unwrap()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<PromptContext> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostGenerator for MockGenerator {
    async fn generate_text(&self, prompt: &PromptContext) -> Result<String, RemoteError> {
        *self.text_calls.lock().unwrap() += 1;
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.text {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(RemoteError::new(kind.clone())),
        }
    }

    async fn generate_image_suggestions(
        &self,
        _topic: &str,
        _tone: &str,
    ) -> Result<Vec<String>, RemoteError> {
        *self.image_calls.lock().unwrap() += 1;
        match &self.images {
            MockBehavior::Success(images) => Ok(images.clone()),
            MockBehavior::Error(kind) => Err(RemoteError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
