use std::time::Duration;

/// Seconds the generation client gives up before the server-side request
/// timeout fires, so a slow model surfaces as a generation error.
const GENERATION_TIMEOUT_MARGIN_SECS: u64 = 10;

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
    /// HTTP request timeout in seconds (default: `120`). Generation calls
    /// to the hosted model routinely take most of a minute.
    pub request_timeout_secs: u64,
    /// SQLite database URL (default: `sqlite://dbarchitect.db`).
    pub database_url: String,
    /// Sessions untouched for this long are dropped (default: `3600`).
    pub session_idle_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    /// | `DATABASE_URL`         | `sqlite://dbarchitect.db`  |
    /// | `SESSION_IDLE_SECS`    | `3600`                     |
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
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://dbarchitect.db".into());

        let session_idle_secs: u64 = std::env::var("SESSION_IDLE_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SESSION_IDLE_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            session_idle_secs,
        }
    }

    /// Timeout for calls to the generation service: shorter than the request
    /// timeout by a fixed margin, and never below one second.
    pub fn generation_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .saturating_sub(GENERATION_TIMEOUT_MARGIN_SECS)
            .max(1);
        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(request_timeout_secs: u64) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs,
            database_url: "sqlite::memory:".to_string(),
            session_idle_secs: 3600,
        }
    }

    #[test]
    fn generation_timeout_is_shorter_than_request_timeout() {
        let cfg = config(120);
        assert_eq!(cfg.generation_timeout(), Duration::from_secs(110));
        assert!(cfg.generation_timeout() < Duration::from_secs(cfg.request_timeout_secs));
    }

    #[test]
    fn generation_timeout_never_drops_to_zero() {
        assert_eq!(config(5).generation_timeout(), Duration::from_secs(1));
    }
}
