// src/normalize.rs
//! Entry normalization: markup-free intro snippet, category key and location tag.
//!
//! Tag stripping repeats a regex pass over `<` + non-`<` chars + `>` until
//! nothing matches, so removing an inner tag cannot splice a new one together.
//! It is not an HTML parser: unclosed tags and entities are left untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::categories::{CategoryTable, CLIMATE_KEY, REGIONAL_KEY};
use crate::ingest::types::SourcedEntry;

pub const ELLIPSIS: &str = "...";
pub const INDIA_LABEL: &str = "India";

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").expect("tag regex"));

/// Entry after normalization, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub title: String,
    pub label: String,
    pub category_key: String,
    pub intro: String,
    pub location: String,
    pub link: Option<String>,
}

/// Remove every `<...>` tag, including ones formed by removing another.
pub fn strip_tags(s: &str) -> String {
    let mut out = RE_TAGS.replace_all(s, "").into_owned();
    // each pass strictly shortens the text, so this terminates
    while RE_TAGS.is_match(&out) {
        out = RE_TAGS.replace_all(&out, "").into_owned();
    }
    out
}

/// Strip, trim, keep the first `budget` chars and always append the ellipsis.
pub fn make_intro(title: &str, summary: Option<&str>, budget: usize) -> String {
    let source = summary.filter(|s| !s.trim().is_empty()).unwrap_or(title);
    let stripped = strip_tags(source);
    let mut intro: String = stripped.trim().chars().take(budget).collect();
    intro.push_str(ELLIPSIS);
    intro
}

/// Source label when the table knows it, else a title heuristic.
pub fn resolve_category(label: &str, title: &str, table: &CategoryTable) -> String {
    if table.contains(label) {
        return label.to_string();
    }
    if title.to_lowercase().contains("climate") {
        CLIMATE_KEY.to_string()
    } else {
        REGIONAL_KEY.to_string()
    }
}

/// "India" when title or text mention it (any case), else `global_label`.
pub fn location_tag(title: &str, text: &str, global_label: &str) -> String {
    let hit = [title, text]
        .iter()
        .any(|s| s.to_lowercase().contains("india"));
    if hit {
        INDIA_LABEL.to_string()
    } else {
        global_label.to_string()
    }
}

pub fn normalize_entry(
    sourced: SourcedEntry,
    budget: usize,
    table: &CategoryTable,
    global_label: &str,
) -> NormalizedEntry {
    let SourcedEntry { label, entry } = sourced;
    let intro = make_intro(&entry.title, entry.summary.as_deref(), budget);
    let category_key = resolve_category(&label, &entry.title, table);
    let location = location_tag(&entry.title, &intro, global_label);
    NormalizedEntry {
        title: entry.title,
        label,
        category_key,
        intro,
        location,
        link: entry.link,
    }
}
