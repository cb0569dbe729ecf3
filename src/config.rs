//! Configuration for the schema provisioner.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_database_name() -> String {
    "nosql-la-crime".to_string()
}

fn default_pool_size() -> u32 {
    10
}

fn default_min_pool_size() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_server_selection_timeout_secs() -> u64 {
    10
}

fn default_upvote_ttl_secs() -> u64 {
    31_536_000 // 1 year
}

/// Configuration for provisioning the crime database schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// MongoDB connection URI
    /// Example: "mongodb://localhost:27017"
    pub mongodb_uri: String,

    /// Name of the logical database to provision
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Connection pool size
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Minimum connection pool size
    #[serde(default = "default_min_pool_size")]
    pub min_pool_size: u32,

    /// MongoDB connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// MongoDB server selection timeout in seconds
    #[serde(default = "default_server_selection_timeout_secs")]
    pub server_selection_timeout_secs: u64,

    /// Upvotes are removed by the engine this many seconds after their
    /// `upvote_date`
    #[serde(default = "default_upvote_ttl_secs")]
    pub upvote_ttl_secs: u64,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: String::new(),
            database_name: default_database_name(),
            pool_size: default_pool_size(),
            min_pool_size: default_min_pool_size(),
            connect_timeout_secs: default_connect_timeout_secs(),
            server_selection_timeout_secs: default_server_selection_timeout_secs(),
            upvote_ttl_secs: default_upvote_ttl_secs(),
        }
    }
}

impl ProvisionConfig {
    /// Creates a new config with the given MongoDB URI.
    pub fn new(mongodb_uri: String) -> Self {
        Self { mongodb_uri, ..Default::default() }
    }

    /// Expiry applied to the `upvotes.upvote_date` TTL index.
    pub fn upvote_ttl(&self) -> Duration {
        Duration::from_secs(self.upvote_ttl_secs)
    }

    /// Returns true if the config is valid for connecting.
    pub fn is_valid(&self) -> bool {
        !self.mongodb_uri.is_empty() && !self.database_name.is_empty() && self.upvote_ttl_secs > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProvisionConfig::default();
        assert!(config.mongodb_uri.is_empty());
        assert_eq!(config.database_name, "nosql-la-crime");
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.min_pool_size, 1);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.server_selection_timeout_secs, 10);
        assert_eq!(config.upvote_ttl_secs, 31_536_000);
    }

    #[test]
    fn test_upvote_ttl() {
        let config = ProvisionConfig { upvote_ttl_secs: 3600, ..Default::default() };
        assert_eq!(config.upvote_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_is_valid() {
        let config = ProvisionConfig::default();
        assert!(!config.is_valid());

        let config = ProvisionConfig::new("mongodb://localhost:27017".to_string());
        assert!(config.is_valid());

        let config = ProvisionConfig {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            upvote_ttl_secs: 0,
            ..Default::default()
        };
        assert!(!config.is_valid());
    }
}
