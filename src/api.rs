//! HTTP surface: the Axum router and handlers wrapping the comment-analysis
//! pipeline for the movie site.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analyzer::{AnalysisSummary, CommentAnalyzer};
use crate::config::AnalyzerConfig;
use crate::lexicon::{self, Lexicon};

#[derive(Clone)]
pub struct AppState {
    lexicon: &'static Lexicon,
    top_n: usize,
}

/// Build the service router. The lexicon is the embedded Turkish default,
/// shared read-only across all in-flight requests.
pub fn router(cfg: &AnalyzerConfig) -> Router {
    let state = AppState {
        lexicon: lexicon::turkish(),
        top_n: cfg.top_n,
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    comments: Vec<String>,
}

/// POST /analyze — run the pipeline over one batch of comment strings.
/// Always 200; the caller branches on the `status` field of the body.
async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Json<AnalysisSummary> {
    info!(batch = body.comments.len(), "analyze request");
    let analyzer = CommentAnalyzer::new(state.lexicon).with_top_n(state.top_n);
    Json(analyzer.analyze_comments(&body.comments))
}
