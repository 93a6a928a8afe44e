// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod categories;
pub mod config;
pub mod enrich;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::enrich::EnrichedNewsItem;
pub use crate::pipeline::NewsPipeline;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tracing::info;

use crate::categories::CategoryTable;
use crate::config::NewsConfig;
use crate::ingest::providers::HttpFeedClient;

/// Build shared state from env/config files with the real HTTP feed client.
pub fn state_from_env() -> Result<AppState> {
    let cfg = NewsConfig::load_default()?;
    let categories = CategoryTable::load_default();
    let client = HttpFeedClient::new(&cfg)?;

    info!(
        sources = cfg.sources.len(),
        categories = categories.len(),
        timeout_secs = cfg.timeout_secs,
        max_concurrent = cfg.max_concurrent_fetches,
        retries = cfg.retries,
        "news pipeline configured"
    );

    let pipeline = NewsPipeline::new(Arc::new(client), Arc::new(categories), Arc::new(cfg));
    Ok(AppState::new(pipeline))
}

/// Full in-process app: news routes plus `/metrics`.
pub async fn app() -> Result<Router> {
    let state = state_from_env()?;
    let metrics = telemetry::Metrics::init()?;
    Ok(router(state).merge(metrics.router()))
}
