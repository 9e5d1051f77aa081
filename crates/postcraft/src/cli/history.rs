//! `history` and `clear` command handlers.
//!
//! Both work on the history file directly, so no API key is needed.

use super::commands::OutputFormat;
use postcraft::{HistoryStore, PostcraftConfig, PostcraftResult, render_history, to_json};

/// Print the last `limit` posts, oldest first.
pub async fn show_history(
    config: &PostcraftConfig,
    limit: usize,
    format: OutputFormat,
) -> PostcraftResult<()> {
    let store = HistoryStore::open(config.history_path()).await;
    let posts = store.recent(limit);

    match format {
        OutputFormat::Human => println!("{}", render_history(posts)),
        OutputFormat::Json => println!("{}", to_json(posts)?),
    }

    Ok(())
}

/// Remove every post from the history.
pub async fn clear_history(config: &PostcraftConfig) -> PostcraftResult<()> {
    let mut store = HistoryStore::open(config.history_path()).await;
    let removed = store.len();
    store.clear().await?;
    println!("Cleared {} posts from {}", removed, store.path().display());
    Ok(())
}
