//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// HTTP worker count; `None` keeps the actix default (one per core).
    pub workers: Option<usize>,
    /// `None` runs the server over the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Sample posts bulk-inserted at startup.
    pub seed_sample_posts: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            workers: parse_var("WORKERS"),
            database,
            seed_sample_posts: parse_var("SEED_SAMPLE_POSTS").unwrap_or(0),
        }
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read and parse an environment variable; unset or unparseable yields `None`.
fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            workers: None,
            database: None,
            seed_sample_posts: 0,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_var_unset_is_none() {
        assert_eq!(parse_var::<u16>("BLOG_API_TEST_UNSET_VARIABLE"), None);
    }
}
