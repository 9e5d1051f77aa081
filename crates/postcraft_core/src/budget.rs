//! Per-length budgets for remote generation calls.

use std::time::Duration;

/// Timeout and output-token budget for one remote call.
///
/// # Examples
///
/// ```
/// use postcraft_core::{Length, LengthBudget};
/// use std::time::Duration;
///
/// let budget = Length::Short.budget();
/// assert_eq!(budget, LengthBudget::new(30, 400));
/// assert_eq!(budget.timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct LengthBudget {
    /// Seconds before the call is abandoned.
    timeout_secs: u64,

    /// Maximum tokens the model may produce.
    max_tokens: u32,
}

impl LengthBudget {
    /// Creates a budget from a timeout in seconds and a token ceiling.
    pub fn new(timeout_secs: u64, max_tokens: u32) -> Self {
        Self {
            timeout_secs,
            max_tokens,
        }
    }

    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
