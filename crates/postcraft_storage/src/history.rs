//! JSON-file history store.

use postcraft_core::GeneratedPost;
use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// File name used when no history path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "post_history.json";

/// Ordered log of generated posts backed by a JSON file.
///
/// Loaded once on open; every mutation rewrites the full file. Writes go to
/// a sibling temp file that is renamed over the target, so a crash leaves
/// either the old or the new log on disk.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    posts: Vec<GeneratedPost>,
}

impl HistoryStore {
    /// Opens the log at `path`.
    ///
    /// A missing file is an empty log. An unreadable file, or one that is not
    /// a JSON array, is logged and also treated as empty; it is replaced on
    /// the next write. Entries that fail to decode are skipped with a warning
    /// and the rest are kept.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let posts = match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<Vec<serde_json::Value>>(&text) {
                Ok(entries) => decode_entries(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "History file is corrupt, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "History file unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(entries = posts.len(), "Loaded history");
        Self { path, posts }
    }

    /// Appends a post and persists the log.
    ///
    /// The post stays in memory even if the write fails.
    #[tracing::instrument(skip(self, post), fields(path = %self.path.display()))]
    pub async fn append(&mut self, post: GeneratedPost) -> PostcraftResult<()> {
        self.posts.push(post);
        self.persist().await?;
        tracing::info!(entries = self.posts.len(), "Appended post to history");
        Ok(())
    }

    /// Empties the log and persists the empty array.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn clear(&mut self) -> PostcraftResult<()> {
        self.posts.clear();
        self.persist().await?;
        tracing::info!("Cleared history");
        Ok(())
    }

    /// The last `limit` posts, oldest first.
    pub fn recent(&self, limit: usize) -> &[GeneratedPost] {
        let start = self.posts.len().saturating_sub(limit);
        &self.posts[start..]
    }

    /// Every post, oldest first.
    pub fn posts(&self) -> &[GeneratedPost] {
        &self.posts
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> PostcraftResult<()> {
        let json = serde_json::to_string_pretty(&self.posts).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(e.to_string()))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = temp_path_for(&self.path);
        tokio::fs::write(&temp_path, json.as_bytes())
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    temp_path.display(),
                    e
                )))
            })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(bytes = json.len(), "Wrote history file");
        Ok(())
    }
}

fn decode_entries(entries: Vec<serde_json::Value>) -> Vec<GeneratedPost> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping unreadable history entry");
                None
            }
        })
        .collect()
}

/// Sibling of `path` with `.tmp` appended to the full file name.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_HISTORY_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
