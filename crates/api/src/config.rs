/// How content validation issues found at startup are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Log each issue as an error and keep serving.
    Warn,
    /// Refuse to start while any issue exists.
    Strict,
}

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
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the JSON content sources (default: `data`).
    pub data_dir: String,
    /// Absolute URL prefix used in the sitemap and canonical links.
    pub site_base_url: String,
    /// Whether content validation issues abort startup.
    pub validation_mode: ValidationMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                             |
    /// |------------------------|-------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                           |
    /// | `PORT`                 | `3000`                              |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                |
    /// | `DATA_DIR`             | `data`                              |
    /// | `SITE_BASE_URL`        | `https://www.lioncashadvance.com`   |
    /// | `CONTENT_VALIDATE`     | `warn` (`strict` to fail startup)   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into());

        let site_base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "https://www.lioncashadvance.com".into());

        let validation_mode = match std::env::var("CONTENT_VALIDATE").as_deref() {
            Ok("strict") => ValidationMode::Strict,
            _ => ValidationMode::Warn,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            site_base_url,
            validation_mode,
        }
    }
}
