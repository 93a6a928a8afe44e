// src/ingest/parse.rs
use anyhow::{anyhow, Result};
use feed_rs::parser;
use metrics::histogram;

use crate::ingest::types::RawEntry;

/// Parse an RSS or Atom document and keep at most `limit` entries, in feed order.
pub fn parse_entries(body: &[u8], limit: usize) -> Result<Vec<RawEntry>> {
    let t0 = std::time::Instant::now();
    let feed = parser::parse(body).map_err(|e| anyhow!("parsing syndication feed: {e}"))?;

    let out: Vec<RawEntry> = feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| RawEntry {
            title: entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string()),
            summary: entry.summary.map(|s| s.content),
            link: entry.links.first().map(|l| l.href.clone()),
        })
        .collect();

    histogram!("news_parse_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>t</title><link>https://example.test</link><description>d</description>
<item><title>First</title><link>https://example.test/1</link><description>&lt;p&gt;One&lt;/p&gt;</description></item>
<item><title>Second</title><link>https://example.test/2</link></item>
<item><title>Third</title><description>Three</description></item>
</channel></rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom</title><id>urn:x</id><updated>2024-01-01T00:00:00Z</updated>
  <entry><title>Atom one</title><id>urn:1</id><updated>2024-01-01T00:00:00Z</updated>
    <link href="https://example.test/a1"/><summary type="html">&lt;b&gt;Bold&lt;/b&gt; text</summary></entry>
</feed>"#;

    #[test]
    fn rss_entries_keep_feed_order_and_limit() {
        let out = parse_entries(RSS.as_bytes(), 2).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "First");
        assert_eq!(out[0].summary.as_deref(), Some("<p>One</p>"));
        assert_eq!(out[0].link.as_deref(), Some("https://example.test/1"));
        assert_eq!(out[1].title, "Second");
        assert!(out[1].summary.is_none());
    }

    #[test]
    fn atom_summary_is_read() {
        let out = parse_entries(ATOM.as_bytes(), 5).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Atom one");
        assert_eq!(out[0].summary.as_deref(), Some("<b>Bold</b> text"));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_entries(b"<html><body>not a feed</body></html>", 2).is_err());
    }
}
