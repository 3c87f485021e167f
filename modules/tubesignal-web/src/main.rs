use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tubesignal_common::{Config, ResearchError};
use tubesignal_research::ResearchPipeline;

mod templates;
use templates::*;

/// Form bounds for the per-run video count.
const MIN_VIDEOS: u32 = 1;
const MAX_VIDEOS: u32 = 20;
const DEFAULT_FORM_VIDEOS: u32 = 5;

// --- App State ---

/// Credential snapshot taken at startup; each submission builds its own
/// pipeline from it.
struct AppState {
    config: Config,
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tubesignal_web=info".parse()?)
                .add_directive("tubesignal_research=info".parse()?)
                .add_directive("tubesignal_common=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    config.log_redacted();

    let addr = format!("{}:{}", config.web_host, config.web_port);
    let state = Arc::new(AppState { config });

    let app = Router::new()
        .route("/", get(form_page))
        .route("/research", post(run_research))
        .with_state(state)
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    info!("TubeSignal web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

async fn form_page() -> impl IntoResponse {
    Html(render_form("", DEFAULT_FORM_VIDEOS))
}

#[derive(Debug, Deserialize)]
struct ResearchForm {
    keyword: String,
    max_videos: Option<u32>,
}

async fn run_research(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ResearchForm>,
) -> impl IntoResponse {
    let max_videos = form
        .max_videos
        .unwrap_or(DEFAULT_FORM_VIDEOS)
        .clamp(MIN_VIDEOS, MAX_VIDEOS);

    let pipeline = ResearchPipeline::from_config(&state.config, max_videos);
    match pipeline.run(&form.keyword).await {
        Ok(report) => Html(render_report(form.keyword.trim(), max_videos, &report)),
        Err(ResearchError::InvalidInput(msg)) => Html(render_error(&msg)),
        Err(e) => {
            warn!(error = %e, "Research run failed");
            Html(render_error("Research run failed, check the server logs"))
        }
    }
}
