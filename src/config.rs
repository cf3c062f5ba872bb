use std::path::PathBuf;

use crate::storage::DEFAULT_CHUNK_SIZE;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_DATABASE_URL: &str = "sqlite://uploads.db";
const DEFAULT_STORAGE_ROOT: &str = "./data/files";
const DEFAULT_ROUTE_PREFIX: &str = "/api/files";

/// Server settings, read once at startup and handed to the app state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub database_url: String,
    /// Directory holding one blob file per upload id.
    pub storage_root: PathBuf,
    pub route_prefix: String,
    pub chunk_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let storage_root = lookup("STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_ROOT));
        let route_prefix = normalize_prefix(
            &lookup("ROUTE_PREFIX").unwrap_or_else(|| DEFAULT_ROUTE_PREFIX.to_string()),
        );
        let chunk_size = lookup("DOWNLOAD_CHUNK_SIZE")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_CHUNK_SIZE);

        Self {
            port,
            bind_addr,
            database_url,
            storage_root,
            route_prefix,
            chunk_size,
        }
    }
}

// "/api/files/" and "api/files" both become "/api/files"; "/" becomes "".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
