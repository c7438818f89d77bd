//! Yorum Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server exposing the comment-analysis pipeline.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yorum_analyzer::api;
use yorum_analyzer::config::AnalyzerConfig;
use yorum_analyzer::lexicon;

/// Compact tracing output; filter overridable via RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("yorum_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    // Force lexicon parsing (and the positive/negative disjointness check)
    // now rather than on the first request.
    let _ = lexicon::turkish();

    let cfg = AnalyzerConfig::load();
    info!(top_n = cfg.top_n, addr = %cfg.bind_addr, "starting yorum-analyzer");

    let router = api::router(&cfg);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
