mod bootstrap;
mod config;
mod db;
mod errors;
mod export;
mod ideas;
mod prompts;
mod routes;
mod state;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::ideas::repository::PgIdeaRepository;
use crate::prompts::repository::PgPromptRepository;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ideas API v{}", env!("CARGO_PKG_VERSION"));

    let state = build_state(config.clone()).await?;

    if config.seed_demo_data {
        bootstrap::seed_if_empty(
            state.ideas.as_ref(),
            state.prompts.as_ref(),
            &config.default_assessor,
        )
        .await?;
    }

    if let Some(path) = &config.import_path {
        let summary =
            bootstrap::import_file(state.ideas.as_ref(), state.prompts.as_ref(), path).await?;
        info!(
            ideas = summary.ideas,
            prompts = summary.prompts,
            submissions = summary.submissions,
            "Startup import loaded"
        );
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres-backed stores when `DATABASE_URL` is set, in-memory otherwise.
async fn build_state(config: Config) -> Result<AppState> {
    let Some(database_url) = config.database_url.clone() else {
        warn!("DATABASE_URL not set; using in-memory stores (data is lost on restart)");
        return Ok(AppState::in_memory(config));
    };

    let pool = create_pool(&database_url).await?;
    ensure_schema(&pool).await?;

    Ok(AppState {
        ideas: Arc::new(PgIdeaRepository::new(pool.clone())),
        prompts: Arc::new(PgPromptRepository::new(pool)),
        config,
    })
}
