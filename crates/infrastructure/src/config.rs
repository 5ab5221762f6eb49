//! Database configuration loaded from environment variables.

/// Database configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DATABASE_URL`: SQLite connection string (default: `"sqlite::memory:"`)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `1`)
///
/// An in-memory database lives inside a single connection, so keep the pool
/// size at 1 when using `sqlite::memory:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: lookup("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
        }
    }

    /// Returns a configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Returns true if the URL points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let vars = HashMap::from([
            ("DATABASE_URL", "sqlite://shop.db"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ]);
        let config = DatabaseConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.url, "sqlite://shop.db");
        assert_eq!(config.max_connections, 4);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_invalid_pool_size_falls_back() {
        let config = DatabaseConfig::from_lookup(|k| {
            (k == "DATABASE_MAX_CONNECTIONS").then(|| "0".to_string())
        });
        assert_eq!(config.max_connections, 1);
    }
}
