// src/ingest/select.rs
//! Feed selection: which sources a request consults and how many entries each may give.

use url::form_urlencoded;

use crate::config::news::{NewsConfig, QUERY_PLACEHOLDER};
use crate::ingest::types::FeedSource;

pub const SEARCH_LABEL: &str = "Search Result";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSelection {
    pub sources: Vec<FeedSource>,
    /// Max entries taken from each source.
    pub limit: usize,
    /// Intro truncation budget in characters.
    pub truncate_at: usize,
}

/// Trimmed query, `None` when missing or blank.
pub fn clean_query(query: Option<&str>) -> Option<&str> {
    query.map(str::trim).filter(|q| !q.is_empty())
}

/// Search mode for a non-blank query, otherwise the curated default list.
pub fn select_feeds(query: Option<&str>, cfg: &NewsConfig) -> FeedSelection {
    match clean_query(query) {
        Some(q) => FeedSelection {
            sources: vec![FeedSource {
                url: search_url(q, cfg),
                label: SEARCH_LABEL.to_string(),
            }],
            limit: cfg.search_limit,
            truncate_at: cfg.search_truncate,
        },
        None => FeedSelection {
            sources: cfg
                .sources
                .iter()
                .map(|s| FeedSource {
                    url: s.url.clone(),
                    label: s.label.clone(),
                })
                .collect(),
            limit: cfg.default_limit,
            truncate_at: cfg.default_truncate,
        },
    }
}

/// Form-encode the query plus topical keywords into the search template.
fn search_url(query: &str, cfg: &NewsConfig) -> String {
    let terms = format!("{} {}", query, cfg.search_keywords.trim());
    let encoded: String = form_urlencoded::byte_serialize(terms.trim().as_bytes()).collect();
    cfg.search_url_template.replace(QUERY_PLACEHOLDER, &encoded)
}
