//! Remote generation error types.

/// Failure conditions of a single chat-completion call.
///
/// Calls are made exactly once; there is no retry policy attached to these
/// kinds. The content pipeline matches on them to decide how to log the
/// fallback it takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RemoteErrorKind {
    /// The request did not complete inside its time budget
    #[display("Request timed out after {}s", seconds)]
    Timeout {
        /// Budget that was exceeded, in seconds
        seconds: u64,
    },
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Connection, TLS or other network failure
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// Body could not be interpreted as a usable completion
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// The request body could not be assembled; nothing was sent
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

impl RemoteErrorKind {
    /// Short label used as a structured logging field.
    pub fn label(&self) -> &'static str {
        match self {
            RemoteErrorKind::Timeout { .. } => "timeout",
            RemoteErrorKind::Http { .. } => "http",
            RemoteErrorKind::Transport(_) => "transport",
            RemoteErrorKind::MalformedResponse(_) => "malformed",
            RemoteErrorKind::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Remote generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new(RemoteErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 503"));
/// assert_eq!(err.kind.label(), "http");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", kind, line, file)]
pub struct RemoteError {
    /// The kind of error that occurred
    pub kind: RemoteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new RemoteError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns true if the call ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, RemoteErrorKind::Timeout { .. })
    }
}
