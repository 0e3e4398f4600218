//! Configuration module for the mirror.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default page size for connection queries.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Mirror configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite mirror file
    pub db_path: PathBuf,
    /// Page size used when no explicit size is passed to connection queries
    pub page_size: u32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("MIRROR_DB_PATH")
            .unwrap_or_else(|_| "./data/mirror.sqlite".to_string())
            .into();

        let page_size = env::var("MIRROR_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let log_level = env::var("MIRROR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_path,
            page_size,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Clear any existing env vars
        env::remove_var("MIRROR_DB_PATH");
        env::remove_var("MIRROR_PAGE_SIZE");
        env::remove_var("MIRROR_LOG_LEVEL");

        let config = Config::from_env();
        assert_eq!(config.db_path, PathBuf::from("./data/mirror.sqlite"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, "info");

        env::set_var("MIRROR_PAGE_SIZE", "25");
        let config = Config::from_env();
        assert_eq!(config.page_size, 25);
        env::remove_var("MIRROR_PAGE_SIZE");
    }
}
