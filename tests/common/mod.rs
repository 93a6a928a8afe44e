// tests/common/mod.rs
//
// Scripted feed clients for fault injection, shared by the integration tests.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ecoportal::categories::CategoryTable;
use ecoportal::config::NewsConfig;
use ecoportal::NewsPipeline;

pub const SEARCH_FIVE: &str = include_str!("../fixtures/search_five.xml");
pub const GREEN_ATOM: &str = include_str!("../fixtures/green_atom.xml");

#[derive(Clone)]
pub enum Reply {
    Body(String),
    Fail(String),
    /// Sleep, then return the body. Used to scramble completion order.
    Delayed(Duration, String),
}

/// Answers by URL prefix; unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Vec<(String, Reply)>,
    pub seen: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, url_prefix: &str, reply: Reply) -> Self {
        self.replies.push((url_prefix.to_string(), reply));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ecoportal::ingest::types::FeedClient for ScriptedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.seen.lock().unwrap().push(url.to_string());
        let reply = self
            .replies
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone());
        match reply {
            Some(Reply::Body(b)) => Ok(b.into_bytes()),
            Some(Reply::Fail(msg)) => Err(anyhow!(msg)),
            Some(Reply::Delayed(d, b)) => {
                tokio::time::sleep(d).await;
                Ok(b.into_bytes())
            }
            None => Err(anyhow!("connection refused: {url}")),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Minimal RSS document with the given item titles.
pub fn rss_with_titles(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .map(|t| {
            format!("<item><title>{t}</title><description>&lt;b&gt;{t}&lt;/b&gt; body</description></item>")
        })
        .collect();
    format!(
        r#"<?xml version="1.0"?><rss version="2.0"><channel><title>x</title><link>https://x.test</link><description>x</description>{items}</channel></rss>"#
    )
}

pub fn default_cfg() -> NewsConfig {
    NewsConfig::default()
}

pub fn pipeline_with(client: Arc<ScriptedClient>, cfg: NewsConfig) -> NewsPipeline {
    NewsPipeline::new(
        client,
        Arc::new(CategoryTable::default_seed()),
        Arc::new(cfg),
    )
}

/// Map of default label → URL, for scripting replies per curated source.
pub fn default_urls(cfg: &NewsConfig) -> HashMap<String, String> {
    cfg.sources
        .iter()
        .map(|s| (s.label.clone(), s.url.clone()))
        .collect()
}
