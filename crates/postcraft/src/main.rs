//! Postcraft CLI binary.
//!
//! - Generate a post for a topic, platform and language
//! - List recent posts from the history
//! - Clear the history

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, clear_history, generate_post, show_history};

    // Pick up OPENROUTER_API_KEY from .env when present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    postcraft::init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => postcraft::PostcraftConfig::from_file(path)?,
        None => postcraft::PostcraftConfig::load()?,
    };

    match cli.command {
        Commands::Generate(args) => generate_post(&config, args).await?,
        Commands::History { limit, format } => show_history(&config, limit, format).await?,
        Commands::Clear => clear_history(&config).await?,
    }

    Ok(())
}
