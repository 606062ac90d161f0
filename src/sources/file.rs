use crate::feed::parse_payload;
use crate::sources::traits::FeedSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Reads a previously saved feed response from disk
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self) -> Result<Value> {
        debug!("Reading feed from {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read feed file {}", self.path.display()))?;

        debug!("Read {} bytes of feed JSON", text.len());

        parse_payload(&text)
            .with_context(|| format!("Failed to parse feed file {}", self.path.display()))
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_and_parses_saved_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"feed": {{"feed_items": []}}}}"#).unwrap();

        let source = FileFeedSource::new(file.path());
        let payload = source.fetch().await.unwrap();
        assert_eq!(payload["feed"]["feed_items"], serde_json::json!([]));
        assert_eq!(source.source_name(), "file");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFeedSource::new(dir.path().join("nope.json"));
        assert!(source.fetch().await.is_err());
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>").unwrap();

        let source = FileFeedSource::new(file.path());
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse feed file"));
    }
}
