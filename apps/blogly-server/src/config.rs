//! Application configuration loaded from environment variables.

use std::env;

use blogly_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Glob matching the Tera templates.
    pub templates_glob: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/blogly".to_string()),
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
            sqlx_logging: parse_var("DB_SQL_LOGGING").unwrap_or(true),
        };

        let templates_glob = env::var("TEMPLATES_DIR")
            .map(|dir| format!("{}/**/*", dir.trim_end_matches('/')))
            .unwrap_or_else(|_| crate::views::DEFAULT_TEMPLATES_GLOB.to_string());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            templates_glob,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
