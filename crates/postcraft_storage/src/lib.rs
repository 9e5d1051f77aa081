//! Persistent post history for Postcraft.
//!
//! The history is a single JSON array of generated posts, oldest first. The
//! whole log is held in memory and rewritten on every change.
//!
//! # Example
//!
//! ```no_run
//! use postcraft_storage::HistoryStore;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = HistoryStore::open("post_history.json").await;
//! for post in store.recent(10) {
//!     println!("{}", post.content());
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;

pub use history::{DEFAULT_HISTORY_FILE, HistoryStore};
