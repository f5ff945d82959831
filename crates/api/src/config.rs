use std::path::PathBuf;

/// Default allow-list of browser origins.
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:8080",
    "http://localhost:1234",
    "https://movies.com",
];

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `1234`).
    pub port: u16,
    /// Allowed request origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seed dataset file; the embedded dataset is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 1234,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            request_timeout_secs: 30,
            seed_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                                          |
    /// |------------------------|------------------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                        |
    /// | `PORT`                 | `1234`                                                           |
    /// | `CORS_ORIGINS`         | `http://localhost:8080,http://localhost:1234,https://movies.com` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                             |
    /// | `MOVIES_SEED_PATH`     | unset (embedded dataset)                                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => parse_var("PORT", "u16", value)?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_var("REQUEST_TIMEOUT_SECS", "u64", value)?,
            None => defaults.request_timeout_secs,
        };

        let seed_path = lookup("MOVIES_SEED_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_path,
        })
    }

    /// True if `origin` is on the allow-list.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|o| o == origin)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
