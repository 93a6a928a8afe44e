// src/config/news.rs
//! News pipeline configuration.
//!
//! Layering, lowest to highest priority:
//! 1. built-in defaults (`NewsConfig::default()`)
//! 2. `config/news.toml` or the file named by `$NEWS_CONFIG_PATH`
//! 3. `NEWS_TIMEOUT_SECS`, `NEWS_MAX_CONCURRENT_FETCHES`, `NEWS_RETRIES`

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_NEWS_CONFIG_PATH: &str = "config/news.toml";
pub const ENV_NEWS_CONFIG_PATH: &str = "NEWS_CONFIG_PATH";
pub const ENV_TIMEOUT_SECS: &str = "NEWS_TIMEOUT_SECS";
pub const ENV_MAX_CONCURRENT: &str = "NEWS_MAX_CONCURRENT_FETCHES";
pub const ENV_RETRIES: &str = "NEWS_RETRIES";

/// Placeholder replaced by the URL-encoded search terms.
pub const QUERY_PLACEHOLDER: &str = "{query}";

const MIN_TIMEOUT_SECS: u64 = 5;
const MAX_TIMEOUT_SECS: u64 = 10;
const MAX_CONCURRENT: usize = 16;
const MAX_RETRIES: u32 = 5;

/// One curated default feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSourceCfg {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Browser-like identification; some providers reject bare clients.
    pub user_agent: String,
    /// Per-fetch timeout, clamped to 5..=10 seconds when loaded.
    pub timeout_secs: u64,
    /// 1 = strictly sequential fetching.
    pub max_concurrent_fetches: usize,
    /// Extra attempts per source after the first one. Off by default.
    pub retries: u32,
    pub retry_delay_ms: u64,
    pub default_limit: usize,
    pub search_limit: usize,
    pub default_truncate: usize,
    pub search_truncate: usize,
    /// Location tag for entries not about India ("Global" or "International").
    pub global_label: String,
    pub search_url_template: String,
    pub search_keywords: String,
    pub sources: Vec<FeedSourceCfg>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 8,
            max_concurrent_fetches: 4,
            retries: 0,
            retry_delay_ms: 500,
            default_limit: 2,
            search_limit: 3,
            default_truncate: 250,
            search_truncate: 200,
            global_label: "Global".to_string(),
            search_url_template:
                "https://news.google.com/rss/search?q={query}&hl=en-IN&gl=IN&ceid=IN:en".to_string(),
            search_keywords: "environment climate sustainability".to_string(),
            sources: default_sources(),
        }
    }
}

fn default_sources() -> Vec<FeedSourceCfg> {
    [
        (
            "https://feeds.bbci.co.uk/news/science_and_environment/rss.xml",
            "Climate Change",
        ),
        (
            "https://www.sciencedaily.com/rss/earth_climate/environmental_science.xml",
            "Green Tech",
        ),
        ("https://www.downtoearth.org.in/rss/environment", "India/Wildlife"),
        (
            "https://news.google.com/rss/search?q=pollution+awareness+india&hl=en-IN&gl=IN&ceid=IN:en",
            "Pollution",
        ),
    ]
    .into_iter()
    .map(|(url, label)| FeedSourceCfg {
        url: url.to_string(),
        label: label.to_string(),
    })
    .collect()
}

impl NewsConfig {
    /// Parse a TOML file. Unknown keys are ignored, missing keys fall back to defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading news config from {}", path.display()))?;
        let cfg: NewsConfig = toml::from_str(&content)
            .with_context(|| format!("parsing news config {}", path.display()))?;
        cfg.validated()
    }

    /// Resolve the config file via env var + fallback path, then apply env overrides.
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load_default() -> Result<Self> {
        let mut cfg = match env::var(ENV_NEWS_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!("{ENV_NEWS_CONFIG_PATH} points to non-existent path"));
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let pb = PathBuf::from(DEFAULT_NEWS_CONFIG_PATH);
                if pb.exists() {
                    Self::load_from_file(&pb)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Override numeric knobs from the environment. Unparsable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_env::<u64>(ENV_TIMEOUT_SECS) {
            self.timeout_secs = v.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        }
        if let Some(v) = parse_env::<usize>(ENV_MAX_CONCURRENT) {
            self.max_concurrent_fetches = v.clamp(1, MAX_CONCURRENT);
        }
        if let Some(v) = parse_env::<u32>(ENV_RETRIES) {
            self.retries = v.min(MAX_RETRIES);
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validated(mut self) -> Result<Self> {
        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user_agent must not be empty"));
        }
        if !self.search_url_template.contains(QUERY_PLACEHOLDER) {
            return Err(anyhow!(
                "search_url_template must contain the {QUERY_PLACEHOLDER} placeholder"
            ));
        }
        self.timeout_secs = self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        self.max_concurrent_fetches = self.max_concurrent_fetches.clamp(1, MAX_CONCURRENT);
        self.retries = self.retries.min(MAX_RETRIES);
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}
