//! # News Pipeline
//! Select → fetch → normalize → enrich, one linear pass per request.
//!
//! Never fails: broken sources contribute nothing, and an empty result is
//! replaced by the placeholder item.

use std::sync::Arc;

use metrics::counter;

use crate::categories::CategoryTable;
use crate::config::NewsConfig;
use crate::enrich::{self, EnrichedNewsItem};
use crate::ingest::{self, select, types::FeedClient, FetchOptions};
use crate::normalize::normalize_entry;

pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Clone)]
pub struct NewsPipeline {
    client: Arc<dyn FeedClient>,
    categories: Arc<CategoryTable>,
    cfg: Arc<NewsConfig>,
}

impl NewsPipeline {
    pub fn new(
        client: Arc<dyn FeedClient>,
        categories: Arc<CategoryTable>,
        cfg: Arc<NewsConfig>,
    ) -> Self {
        Self {
            client,
            categories,
            cfg,
        }
    }

    pub fn config(&self) -> &NewsConfig {
        &self.cfg
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Run with today's date.
    pub async fn run(&self, query: Option<&str>) -> Vec<EnrichedNewsItem> {
        let date = chrono::Local::now().format(DATE_FORMAT).to_string();
        self.run_at(query, &date).await
    }

    pub async fn run_at(&self, query: Option<&str>, date: &str) -> Vec<EnrichedNewsItem> {
        ingest::ensure_metrics_described();
        counter!("news_requests_total").increment(1);

        let query = select::clean_query(query);
        let selection = select::select_feeds(query, &self.cfg);
        let opts = FetchOptions {
            max_concurrent: self.cfg.max_concurrent_fetches,
            retries: self.cfg.retries,
            retry_delay: std::time::Duration::from_millis(self.cfg.retry_delay_ms),
        };

        let raw = ingest::fetch_all(self.client.as_ref(), &selection, opts).await;

        let mut items: Vec<EnrichedNewsItem> = raw
            .into_iter()
            .map(|sourced| {
                let n = normalize_entry(
                    sourced,
                    selection.truncate_at,
                    &self.categories,
                    &self.cfg.global_label,
                );
                enrich::assemble(n, &self.categories, date, query)
            })
            .collect();

        if enrich::ensure_non_empty(
            &mut items,
            &self.categories,
            date,
            query,
            &self.cfg.global_label,
        ) {
            tracing::info!(query = ?query, "no feed entries, serving placeholder");
            counter!("news_placeholder_total").increment(1);
        }

        tracing::debug!(query = ?query, items = items.len(), "news pipeline done");
        items
    }
}
