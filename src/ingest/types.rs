// src/ingest/types.rs
use anyhow::Result;

/// A (URL, category label) pair consulted for syndicated content.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FeedSource {
    pub url: String,
    pub label: String, // e.g., "Climate Change", "Search Result"
}

/// One feed item as handed over by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub summary: Option<String>, // may contain markup
    pub link: Option<String>,
}

/// An entry tagged with the label of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedEntry {
    pub label: String,
    pub entry: RawEntry,
}

/// Transport seam: retrieves the raw body of a feed URL.
/// Non-success statuses must surface as errors.
#[async_trait::async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
    fn name(&self) -> &'static str;
}
