//! Browser collaborator: load a page and hand back its network log.
//!
//! The orchestrator only depends on [`NetworkLogSource`]; it does not know
//! whether entries come from a live browser or a saved file.

mod chromium;

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::netlog::{load_log_entries, LogEntry};

pub use chromium::ChromiumSource;

/// Produces the network log entries recorded while loading `page_url`,
/// in the order the requests were issued.
#[async_trait]
pub trait NetworkLogSource {
    async fn capture(&self, page_url: &str) -> Result<Vec<LogEntry>>;
}

/// Replays a JSON Lines log saved by an earlier capture. The page URL is
/// ignored.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NetworkLogSource for FileSource {
    async fn capture(&self, page_url: &str) -> Result<Vec<LogEntry>> {
        tracing::debug!(page_url, "replaying network log from {}", self.path.display());
        load_log_entries(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlog::save_log_entries;
    use serde_json::json;

    #[tokio::test]
    async fn file_source_replays_saved_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let entries = vec![LogEntry::new(json!({
            "message": { "params": { "request": { "url": "https://h.example/x" } } }
        }))];
        save_log_entries(&path, &entries).unwrap();

        let source = FileSource::new(&path);
        let replayed = source.capture("https://ignored.example/").await.unwrap();
        assert_eq!(replayed, entries);
    }
}
