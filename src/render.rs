// src/render.rs
//! Minimal HTML view for `/news`. All dynamic text goes through `html_escape`.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::enrich::EnrichedNewsItem;

pub trait NewsRenderer: Send + Sync {
    fn render(&self, items: &[EnrichedNewsItem], query: Option<&str>) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl NewsRenderer for HtmlRenderer {
    fn render(&self, items: &[EnrichedNewsItem], query: Option<&str>) -> String {
        let q = query.unwrap_or_default();
        let mut out = String::with_capacity(4096 + items.len() * 1024);

        out.push_str(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>EcoPortal News</title>\n\
             <link rel=\"stylesheet\" href=\"/static/css/news.css\">\n</head>\n<body>\n\
             <header><h1>Environmental News</h1>\n",
        );
        let _ = write!(
            out,
            "<form method=\"get\" action=\"/news\"><input type=\"search\" name=\"q\" value=\"{}\" \
             placeholder=\"Search environmental topics\"><button type=\"submit\">Search</button></form>\n",
            encode_double_quoted_attribute(q)
        );
        if !q.is_empty() {
            let _ = writeln!(
                out,
                "<p class=\"search-echo\">Results for &ldquo;{}&rdquo;</p>",
                encode_text(q)
            );
        }
        out.push_str("</header>\n<main>\n");

        for it in items {
            render_item(&mut out, it);
        }

        out.push_str("</main>\n</body>\n</html>\n");
        out
    }
}

fn render_item(out: &mut String, it: &EnrichedNewsItem) {
    out.push_str("<article class=\"news-item\">\n");
    let _ = writeln!(
        out,
        "<div class=\"meta\"><span class=\"category\">{}</span> <span class=\"location\">{}</span> <time>{}</time></div>",
        encode_text(&it.category),
        encode_text(&it.location),
        encode_text(&it.date)
    );
    match &it.link {
        Some(link) => {
            let _ = writeln!(
                out,
                "<h2><a href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a></h2>",
                encode_double_quoted_attribute(link),
                encode_text(&it.title)
            );
        }
        None => {
            let _ = writeln!(out, "<h2>{}</h2>", encode_text(&it.title));
        }
    }
    for (class, heading, body) in [
        ("intro", None, &it.intro),
        ("explanation", Some("What is happening?"), &it.explanation),
        ("impact", Some("Why it matters"), &it.impact),
        ("awareness", Some("What you can do"), &it.awareness),
        ("conclusion", None, &it.conclusion),
    ] {
        match heading {
            Some(h) => {
                let _ = writeln!(
                    out,
                    "<section class=\"{class}\"><h3>{h}</h3><p>{}</p></section>",
                    encode_text(body)
                );
            }
            None => {
                let _ = writeln!(out, "<p class=\"{class}\">{}</p>", encode_text(body));
            }
        }
    }
    out.push_str("</article>\n");
}
