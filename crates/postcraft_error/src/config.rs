//! Configuration error types.

/// Configuration error with source location.
///
/// Raised for a missing credential, an unreadable configuration file, or a
/// request value outside the supported set (unknown platform, language or
/// length). These are the only errors the content pipeline surfaces.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_error::ConfigError;
    ///
    /// let err = ConfigError::new("OPENROUTER_API_KEY not set");
    /// assert!(err.message.contains("OPENROUTER_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required environment variable is absent or blank.
    #[track_caller]
    pub fn missing_env(var: &str) -> Self {
        Self::new(format!("{} environment variable not set", var))
    }

    /// A request field holds a value outside its supported set.
    ///
    /// ```
    /// use postcraft_error::ConfigError;
    ///
    /// let err = ConfigError::unsupported("platform", "MySpace");
    /// assert_eq!(err.message, "Unsupported platform: MySpace");
    /// ```
    #[track_caller]
    pub fn unsupported(field: &str, value: &str) -> Self {
        Self::new(format!("Unsupported {}: {}", field, value))
    }
}
