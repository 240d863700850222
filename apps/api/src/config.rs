use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing or a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub uploads_dir: PathBuf,
    /// Base URL of the external matcher service.
    pub matcher_url: String,
    pub max_body_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            port: parse_env("PORT", DEFAULT_PORT)?,
            uploads_dir: std::env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            matcher_url: std::env::var("MATCHER_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by router tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://unused".to_string(),
            db_max_connections: 1,
            port: 0,
            uploads_dir: PathBuf::from("uploads"),
            matcher_url: "http://127.0.0.1:9".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            rust_log: "debug".to_string(),
        }
    }
}
