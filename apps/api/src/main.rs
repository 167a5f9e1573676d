mod artifacts;
mod config;
mod errors;
mod models;
mod prediction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::artifacts::load_artifacts;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Salary Prediction API v{}", env!("CARGO_PKG_VERSION"));

    // Load pretrained artifacts — missing or corrupt files abort startup
    let artifacts = load_artifacts(&config.artifact_dir).with_context(|| {
        format!(
            "failed to load model artifacts from {}",
            config.artifact_dir.display()
        )
    })?;
    info!(
        "Artifacts loaded: {} feature columns, text variant: {}",
        artifacts.feature_width(),
        artifacts.vectorizer.is_some()
    );

    let cors = build_cors_layer(&config)?;

    let state = AppState {
        config: config.clone(),
        encoder: Arc::new(artifacts.encoder),
        vectorizer: artifacts.vectorizer.map(Arc::new),
        model: Arc::new(artifacts.model),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from configured origins. Credentials are allowed,
/// so origins must be listed explicitly — no wildcard.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
