//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use postcraft::DEFAULT_HISTORY_LIMIT;
use std::path::PathBuf;

/// Postcraft - AI social media post generator
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(about = "Generate scroll-stopping social media posts with AI and template fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a post and add it to the history
    Generate(GenerateArgs),

    /// Show recent posts, newest last
    History {
        /// Maximum number of posts to display
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete every post from the history
    Clear,
}

/// Options for a single generation
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// What the post is about
    #[arg(long)]
    pub topic: String,

    /// Length tier: short, medium or long
    #[arg(long, default_value = "medium")]
    pub length: String,

    /// Target platform: TikTok, Facebook, Instagram, LinkedIn or Twitter
    #[arg(long, default_value = "TikTok")]
    pub platform: String,

    /// Voice of the post, e.g. Inspirational, Urgent, Friendly
    #[arg(long, default_value = "Inspirational")]
    pub tone: String,

    /// Output language: EN or BM
    #[arg(long, default_value = "EN")]
    pub language: String,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["postcraft", "generate", "--topic", "focus"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.length, "medium");
        assert_eq!(args.platform, "TikTok");
        assert_eq!(args.tone, "Inspirational");
        assert_eq!(args.language, "EN");
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn history_and_global_flags() {
        let cli = Cli::try_parse_from([
            "postcraft", "history", "--limit", "3", "--format", "json", "--verbose", "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::History {
                limit: 3,
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn topic_is_required() {
        assert!(Cli::try_parse_from(["postcraft", "generate"]).is_err());
    }
}
