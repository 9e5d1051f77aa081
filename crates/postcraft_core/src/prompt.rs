//! Prompt context handed to the remote generation client.

use crate::LengthBudget;
use std::time::Duration;

/// A fully built chat prompt plus the budget to run it under.
///
/// # Examples
///
/// ```
/// use postcraft_core::{Length, PromptContext};
/// use std::time::Duration;
///
/// let prompt = PromptContext::new("You are a copywriter.", "Write about focus.", Length::Short.budget());
/// assert_eq!(*prompt.max_tokens(), 400);
/// assert_eq!(*prompt.timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptContext {
    /// System message: persona and factuality directives.
    system: String,

    /// User message: the post instructions.
    user: String,

    /// Output token ceiling.
    max_tokens: u32,

    /// Time allowed for the call.
    timeout: Duration,
}

impl PromptContext {
    /// Creates a prompt context from messages and a length budget.
    pub fn new(system: impl Into<String>, user: impl Into<String>, budget: LengthBudget) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            max_tokens: *budget.max_tokens(),
            timeout: budget.timeout(),
        }
    }
}
