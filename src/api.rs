use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::enrich::EnrichedNewsItem;
use crate::ingest::select::clean_query;
use crate::pipeline::NewsPipeline;
use crate::render::{HtmlRenderer, NewsRenderer};

pub const STATIC_DIR: &str = "static";

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NewsPipeline>,
    pub renderer: Arc<dyn NewsRenderer>,
}

impl AppState {
    pub fn new(pipeline: NewsPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            renderer: Arc::new(HtmlRenderer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/news", get(news_page))
        .route("/api/news", get(news_json))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct NewsQuery {
    #[serde(default)]
    q: Option<String>,
}

#[derive(Serialize)]
struct NewsResp {
    query: Option<String>,
    items: Vec<EnrichedNewsItem>,
}

async fn news_page(State(state): State<AppState>, Query(params): Query<NewsQuery>) -> Html<String> {
    let query = clean_query(params.q.as_deref());
    let items = state.pipeline.run(query).await;
    Html(state.renderer.render(&items, query))
}

async fn news_json(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Json<NewsResp> {
    let query = clean_query(params.q.as_deref());
    let items = state.pipeline.run(query).await;
    Json(NewsResp {
        query: query.map(str::to_string),
        items,
    })
}
