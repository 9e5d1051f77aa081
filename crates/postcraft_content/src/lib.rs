//! Post generation pipeline for Postcraft.
//!
//! [`ContentPipeline`] turns a [`GenerationRequest`](postcraft_core::GenerationRequest)
//! into a finished post: remote text with template fallback, long-form
//! reflow, platform layout, a call to action and two image ideas. Every
//! result is appended to the post history.
//!
//! # Example
//!
//! ```rust,ignore
//! use postcraft_content::ContentPipeline;
//! use postcraft_interface::ThreadRandom;
//! use postcraft_models::{ClientConfig, OpenRouterClient};
//! use postcraft_storage::HistoryStore;
//! use postcraft_templates::TemplateBank;
//! use std::sync::Arc;
//!
//! let client = OpenRouterClient::new(ClientConfig::from_env()?)?;
//! let templates = TemplateBank::new(Arc::new(ThreadRandom));
//! let history = HistoryStore::open("post_history.json").await;
//! let pipeline = ContentPipeline::new(client, templates, history);
//!
//! let request = GenerationRequest::parse("focus", "short", "Twitter", "Friendly", "EN")?;
//! let post = pipeline.generate(&request).await?;
//! println!("{}", post.content());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod formatter;
mod pipeline;
mod prompt;
mod reflow;

pub use formatter::{format_for_platform, hashtags};
pub use pipeline::{ContentPipeline, DEFAULT_HISTORY_LIMIT};
pub use prompt::{build_prompt, system_prompt, user_prompt};
pub use reflow::{SENTENCES_PER_PARAGRAPH, format_long_content};
