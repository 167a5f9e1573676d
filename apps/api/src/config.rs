use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub artifact_dir: PathBuf,
    pub port: u16,
    /// Origins allowed by the CORS layer. Defaults to the local dev
    /// frontends; set `CORS_ORIGINS` (comma-separated) for production.
    pub cors_origins: Vec<String>,
    pub rust_log: String,
}

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            artifact_dir: PathBuf::from(require_env("ARTIFACT_DIR")?),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
