//! Core data types for the Postcraft post generator.
//!
//! This crate provides the request, post and policy types shared by every
//! other Postcraft crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod budget;
mod options;
mod post;
mod prompt;
mod request;
mod rules;

pub use budget::LengthBudget;
pub use options::{Language, Length, Platform};
pub use post::GeneratedPost;
pub use prompt::PromptContext;
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use rules::PlatformFormatRules;
