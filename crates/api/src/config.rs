use std::path::Path;

use pressing_core::storage_suggestion::StorageRule;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JSON file holding the ordered storage suggestion rules.
    pub storage_rules_path: String,
    /// Days added to the registration time when no promised date is given.
    /// Unset means items are registered without a deadline.
    pub default_promise_days: Option<i64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `STORAGE_RULES_PATH`   | `config/storage_rules.json`  |
    /// | `DEFAULT_PROMISE_DAYS` | unset                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_rules_path = std::env::var("STORAGE_RULES_PATH")
            .unwrap_or_else(|_| "config/storage_rules.json".into());

        let default_promise_days = std::env::var("DEFAULT_PROMISE_DAYS").ok().map(|v| {
            let days: i64 = v
                .parse()
                .expect("DEFAULT_PROMISE_DAYS must be a valid integer");
            pressing_core::deadline::validate_days(days)
                .unwrap_or_else(|e| panic!("DEFAULT_PROMISE_DAYS out of range: {e}"));
            days
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_rules_path,
            default_promise_days,
        }
    }
}

/// Errors raised while reading configuration files at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the ordered storage suggestion rules from a JSON file.
///
/// The file holds an array of `{ "keywords": [...], "suggestion": "..." }`.
/// A missing file yields no rules, in which case every suggestion falls back
/// to the built-in default.
pub fn load_storage_rules(path: impl AsRef<Path>) -> Result<Vec<StorageRule>, ConfigError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                path = %shown,
                "Storage rules file not found, using default suggestion",
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: shown,
                source,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: shown,
        source,
    })
}
