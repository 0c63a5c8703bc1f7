/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. Constructed once
/// in `main` and shared through `AppState` -- nothing reads the
/// environment after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://watch_history.db`).
    pub database_url: String,
    /// OMDb API key sent with every provider request.
    pub omdb_api_key: String,
    /// OMDb endpoint (default: `http://www.omdbapi.com/`).
    pub omdb_base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Free development key matching the original deployment; override with
/// `OMDB_API_KEY` for real use.
const DEFAULT_OMDB_API_KEY: &str = "756abb2f";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `5001`                      |
    /// | `DATABASE_URL`         | `sqlite://watch_history.db` |
    /// | `OMDB_API_KEY`         | development key             |
    /// | `OMDB_BASE_URL`        | `http://www.omdbapi.com/`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://watch_history.db".into());

        let omdb_api_key =
            std::env::var("OMDB_API_KEY").unwrap_or_else(|_| DEFAULT_OMDB_API_KEY.into());

        let omdb_base_url =
            std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| "http://www.omdbapi.com/".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            omdb_api_key,
            omdb_base_url,
            request_timeout_secs,
        }
    }
}
