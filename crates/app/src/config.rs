//! Application configuration loaded from environment variables.

use infrastructure::DatabaseConfig;

/// Application configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`: see [`DatabaseConfig`]
/// - `PRODUCT_NOTIFICATION_EMAIL`: recipient of new-product emails (default: `"catalog@example.com"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub product_notification_email: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database: DatabaseConfig::from_lookup(&lookup),
            product_notification_email: lookup("PRODUCT_NOTIFICATION_EMAIL")
                .unwrap_or(defaults.product_notification_email),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            product_notification_email: "catalog@example.com".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.database, DatabaseConfig::default());
        assert_eq!(config.product_notification_email, "catalog@example.com");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(|key| match key {
            "RUST_LOG" => Some("debug".to_string()),
            "DATABASE_URL" => Some("sqlite://shop.db".to_string()),
            _ => None,
        });

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.database.url, "sqlite://shop.db");
        assert_eq!(config.product_notification_email, "catalog@example.com");
    }
}
