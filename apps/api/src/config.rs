use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; without `DATABASE_URL` the service runs on
/// in-memory stores.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Load demo ideas and prompts into empty stores at startup.
    pub seed_demo_data: bool,
    /// Recorded as `assessed_by` when an assessment names nobody.
    pub default_assessor: String,
    /// Export bundle imported once at startup, after seeding.
    pub import_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_demo_data: match optional_env("SEED_DEMO_DATA") {
                Some(raw) => parse_flag(&raw)
                    .with_context(|| format!("SEED_DEMO_DATA must be true or false, got '{raw}'"))?,
                None => true,
            },
            default_assessor: optional_env("DEFAULT_ASSESSOR")
                .unwrap_or_else(|| "Assessment Team".to_string()),
            import_path: optional_env("IMPORT_PATH").map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            seed_demo_data: true,
            default_assessor: "Assessment Team".to_string(),
            import_path: None,
        }
    }
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
