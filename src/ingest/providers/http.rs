// src/ingest/providers/http.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::NewsConfig;
use crate::ingest::types::FeedClient;

const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/xml;q=0.9, text/xml;q=0.9, */*;q=0.8";

/// reqwest-backed client with an explicit timeout and browser-like User-Agent.
#[derive(Clone)]
pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new(cfg: &NewsConfig) -> Result<Self> {
        if cfg.user_agent.trim().is_empty() {
            return Err(anyhow!("feed client needs a non-empty user agent"));
        }
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .timeout(cfg.timeout())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("building feed http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        let body = resp.bytes().await.context("reading feed body")?;
        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
