//! Error types for Postcraft.
//!
//! This crate provides the error types used throughout the Postcraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Remote errors are transient and absorbed by the content pipeline. Only
//! configuration errors are expected to reach the caller of `generate`.
//!
//! # Examples
//!
//! ```
//! use postcraft_error::{ConfigError, PostcraftResult};
//!
//! fn load_key() -> PostcraftResult<String> {
//!     Err(ConfigError::new("OPENROUTER_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod remote;
mod storage;

pub use config::ConfigError;
pub use error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use json::JsonError;
pub use remote::{RemoteError, RemoteErrorKind};
pub use storage::{StorageError, StorageErrorKind};
