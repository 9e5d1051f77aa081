//! Postcraft - social media post generator.
//!
//! Postcraft writes social media posts with a remote chat-completion model,
//! falls back to curated templates when the model is unavailable, lays the
//! text out for the target platform, appends a call to action and suggests
//! two images. Every post is kept in a local JSON history.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use postcraft::{GenerationRequest, PostcraftConfig, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PostcraftConfig::load()?;
//!     let pipeline = build_pipeline(&config).await?;
//!
//!     let request = GenerationRequest::parse("focus", "short", "Twitter", "Friendly", "EN")?;
//!     let post = pipeline.generate(&request).await?;
//!     println!("{}", post.content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Postcraft is organized as a workspace with focused crates:
//!
//! - `postcraft_error` - Error types
//! - `postcraft_core` - Request, post and policy types
//! - `postcraft_interface` - `PostGenerator` and `RandomSource` traits
//! - `postcraft_templates` - Fallback templates and calls to action
//! - `postcraft_models` - OpenRouter client
//! - `postcraft_content` - Prompting, layout and the generation pipeline
//! - `postcraft_storage` - JSON post history
//!
//! This crate re-exports everything for convenience and adds configuration
//! loading, logging setup and the `postcraft` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod render;
mod telemetry;

pub use app::build_pipeline;
pub use config::{HistorySettings, PostcraftConfig};
pub use render::{render_history, render_history_entry, render_post, to_json};
pub use telemetry::init_logging;

pub use postcraft_content::*;
pub use postcraft_core::*;
pub use postcraft_error::*;
pub use postcraft_interface::*;
pub use postcraft_models::*;
pub use postcraft_storage::*;
pub use postcraft_templates::*;
