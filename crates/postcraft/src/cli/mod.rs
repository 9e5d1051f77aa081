//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the postcraft binary.

mod commands;
mod generate;
mod history;

pub use commands::{Cli, Commands};
pub use generate::generate_post;
pub use history::{clear_history, show_history};
