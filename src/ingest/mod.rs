// src/ingest/mod.rs
pub mod parse;
pub mod providers;
pub mod select;
pub mod types;

use crate::ingest::select::FeedSelection;
use crate::ingest::types::{FeedClient, FeedSource, RawEntry, SourcedEntry};
use anyhow::Result;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use std::time::Duration;

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("news_requests_total", "News pipeline runs.");
        describe_counter!(
            "news_source_errors_total",
            "Feed sources that failed to fetch or parse."
        );
        describe_counter!(
            "news_entries_total",
            "Entries taken from feeds after the per-source limit."
        );
        describe_counter!(
            "news_placeholder_total",
            "Runs that produced no entries and served the placeholder item."
        );
        describe_histogram!("news_fetch_ms", "Per-source fetch time in milliseconds.");
        describe_histogram!("news_parse_ms", "Feed parse time in milliseconds.");
    });
}

#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub max_concurrent: usize,
    /// Extra attempts after the first; 0 = one attempt per source.
    pub retries: u32,
    pub retry_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            retries: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Fetch and parse one source, taking at most `limit` entries.
pub async fn fetch_source(
    client: &dyn FeedClient,
    source: &FeedSource,
    limit: usize,
    opts: FetchOptions,
) -> Result<Vec<RawEntry>> {
    let t0 = std::time::Instant::now();
    let mut attempt: u32 = 0;
    let body = loop {
        match client.fetch(&source.url).await {
            Ok(b) => break b,
            Err(e) if attempt < opts.retries => {
                attempt += 1;
                let delay = opts.retry_delay * (1u32 << (attempt - 1).min(6));
                tracing::debug!(error = ?e, url = %source.url, attempt, ?delay, "retrying feed");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    };
    histogram!("news_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    parse::parse_entries(&body, limit)
}

/// Fetch every selected source, isolating failures per source.
///
/// Output is grouped by source in selection order, then feed order, regardless
/// of how many fetches run at once.
pub async fn fetch_all(
    client: &dyn FeedClient,
    selection: &FeedSelection,
    opts: FetchOptions,
) -> Vec<SourcedEntry> {
    ensure_metrics_described();

    let limit = selection.limit;
    let fetches: Vec<_> = selection
        .sources
        .iter()
        .map(move |source| {
            async move {
                let res = fetch_source(client, source, limit, opts).await;
                (source, res)
            }
            .boxed()
        })
        .collect();

    let results: Vec<(&FeedSource, Result<Vec<RawEntry>>)> = stream::iter(fetches)
        .buffered(opts.max_concurrent.max(1))
        .collect()
        .await;

    let mut out = Vec::new();
    for (source, res) in results {
        match res {
            Ok(entries) => {
                tracing::debug!(label = %source.label, count = entries.len(), "feed ok");
                counter!("news_entries_total").increment(entries.len() as u64);
                out.extend(entries.into_iter().map(|entry| SourcedEntry {
                    label: source.label.clone(),
                    entry,
                }));
            }
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    url = %source.url,
                    label = %source.label,
                    client = client.name(),
                    "feed source failed"
                );
                counter!("news_source_errors_total").increment(1);
            }
        }
    }
    out
}
