//! EcoPortal News Service: binary entrypoint
//! Boots the Axum HTTP server with the news pipeline, metrics and static assets.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing logs for local runs.
/// Shuttle installs its own subscriber in deployed environments, so this is best-effort.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecoportal=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let router = ecoportal::app().await?;
    tracing::info!("ecoportal news service ready");

    Ok(router.into())
}
