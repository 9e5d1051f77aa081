//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, RemoteError, StorageError};

/// Every error a Postcraft crate can return.
///
/// # Examples
///
/// ```
/// use postcraft_error::{PostcraftError, RemoteError, RemoteErrorKind};
///
/// let remote = RemoteError::new(RemoteErrorKind::Timeout { seconds: 30 });
/// let err: PostcraftError = remote.into();
/// assert!(format!("{}", err).contains("timed out after 30s"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostcraftErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote generation error
    #[from(RemoteError)]
    Remote(RemoteError),
    /// History storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Postcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ConfigError, PostcraftErrorKind, PostcraftResult};
///
/// fn might_fail() -> PostcraftResult<()> {
///     Err(ConfigError::unsupported("language", "FR"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PostcraftErrorKind::Config(_)));
/// assert!(err.is_config());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postcraft Error: {}", _0)]
pub struct PostcraftError(Box<PostcraftErrorKind>);

impl PostcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PostcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostcraftErrorKind {
        &self.0
    }

    /// Returns true for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(*self.0, PostcraftErrorKind::Config(_))
    }
}

// Generic From implementation for any type that converts to PostcraftErrorKind
impl<T> From<T> for PostcraftError
where
    T: Into<PostcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postcraft operations.
pub type PostcraftResult<T> = std::result::Result<T, PostcraftError>;
