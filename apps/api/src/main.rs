use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_analyzer::analysis::taxonomy::Taxonomy;
use resume_analyzer::analysis::ResumeAnalyzer;
use resume_analyzer::config::Config;
use resume_analyzer::routes::build_router;
use resume_analyzer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_analyzer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Taxonomy is loaded once and shared read-only for the life of the process
    let taxonomy = match &config.taxonomy_path {
        Some(path) => Taxonomy::from_json_file(path)
            .with_context(|| format!("Failed to load taxonomy from {}", path.display()))?,
        None => Taxonomy::builtin(),
    };
    info!("Taxonomy loaded ({} fields)", taxonomy.fields().len());

    let analyzer = ResumeAnalyzer::new(Arc::new(taxonomy));

    let state = AppState {
        analyzer: Arc::new(analyzer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
