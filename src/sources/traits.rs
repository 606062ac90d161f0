use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Anything that can hand over one raw feed response.
/// An HTTP fetcher for the aggregator API plugs in here.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one feed payload as an untyped tree
    async fn fetch(&self) -> Result<Value>;

    /// Get the name of the feed source
    fn source_name(&self) -> &'static str;
}
