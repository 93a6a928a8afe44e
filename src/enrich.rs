// src/enrich.rs
//! Educational enrichment and final item assembly.

use serde::Serialize;

use crate::categories::CategoryTable;
use crate::normalize::NormalizedEntry;

pub const CONCLUSION: &str =
    "Every informed action counts: share what you learned and help protect our planet.";

pub const PLACEHOLDER_TITLE: &str = "Welcome to EcoPortal News";
pub const PLACEHOLDER_CATEGORY: &str = "Portal Update";

/// The unit handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedNewsItem {
    pub title: String,
    pub category: String,
    pub intro: String,
    pub explanation: String,
    pub impact: String,
    pub awareness: String,
    pub conclusion: String,
    pub date: String,
    pub location: String,
    pub search_query: Option<String>,
    pub link: Option<String>,
}

pub fn assemble(
    entry: NormalizedEntry,
    table: &CategoryTable,
    date: &str,
    query: Option<&str>,
) -> EnrichedNewsItem {
    let e = table.lookup(&entry.category_key);
    EnrichedNewsItem {
        title: entry.title,
        category: entry.label,
        intro: entry.intro,
        explanation: e.explanation.clone(),
        impact: e.impact.clone(),
        awareness: e.tip.clone(),
        conclusion: CONCLUSION.to_string(),
        date: date.to_string(),
        location: entry.location,
        search_query: query.map(str::to_string),
        link: entry.link,
    }
}

/// Synthetic item served when no feed produced anything.
pub fn placeholder(
    table: &CategoryTable,
    date: &str,
    query: Option<&str>,
    global_label: &str,
) -> EnrichedNewsItem {
    let e = table.lookup(table.default_key());
    EnrichedNewsItem {
        title: PLACEHOLDER_TITLE.to_string(),
        category: PLACEHOLDER_CATEGORY.to_string(),
        intro: "EcoPortal brings together environmental news from trusted sources. \
                Our feeds are updating right now, please check back in a few minutes."
            .to_string(),
        explanation: e.explanation.clone(),
        impact: e.impact.clone(),
        awareness: e.tip.clone(),
        conclusion: CONCLUSION.to_string(),
        date: date.to_string(),
        location: global_label.to_string(),
        search_query: query.map(str::to_string),
        link: None,
    }
}

/// Never hand an empty list to the view layer. Returns true when the placeholder was added.
pub fn ensure_non_empty(
    items: &mut Vec<EnrichedNewsItem>,
    table: &CategoryTable,
    date: &str,
    query: Option<&str>,
    global_label: &str,
) -> bool {
    if !items.is_empty() {
        return false;
    }
    items.push(placeholder(table, date, query, global_label));
    true
}
