//! Command line arguments for the provisioner binary.

use crate::config::ProvisionConfig;
use clap::Parser;

/// Provision the crime database schema: collections and indexes.
#[derive(Debug, Clone, Parser)]
#[command(name = "crimedb-init", version, about)]
pub struct Cli {
    /// MongoDB connection URI.
    /// Example: "mongodb://localhost:27017"
    #[arg(env = "CRIMEDB_MONGODB_URI", long, default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// Name of the logical database to provision.
    #[arg(env = "CRIMEDB_DATABASE", long, default_value = "nosql-la-crime")]
    pub database: String,

    /// Connection pool size.
    #[arg(env = "CRIMEDB_POOL_SIZE", long, default_value = "10")]
    pub pool_size: u32,

    /// Minimum connection pool size.
    #[arg(env = "CRIMEDB_MIN_POOL_SIZE", long, default_value = "1")]
    pub min_pool_size: u32,

    /// MongoDB connect timeout in seconds.
    #[arg(env = "CRIMEDB_CONNECT_TIMEOUT_SECS", long, default_value = "10")]
    pub connect_timeout_secs: u64,

    /// MongoDB server selection timeout in seconds.
    #[arg(env = "CRIMEDB_SERVER_SELECTION_TIMEOUT_SECS", long, default_value = "10")]
    pub server_selection_timeout_secs: u64,

    /// Upvote expiry in seconds.
    /// The engine removes an upvote this long after its `upvote_date`.
    #[arg(env = "CRIMEDB_UPVOTE_TTL_SECS", long, default_value = "31536000")]
    pub upvote_ttl_secs: u64,
}

impl Cli {
    /// Converts the parsed arguments into a [`ProvisionConfig`].
    pub fn into_config(self) -> ProvisionConfig {
        ProvisionConfig {
            mongodb_uri: self.mongodb_uri,
            database_name: self.database,
            pool_size: self.pool_size,
            min_pool_size: self.min_pool_size,
            connect_timeout_secs: self.connect_timeout_secs,
            server_selection_timeout_secs: self.server_selection_timeout_secs,
            upvote_ttl_secs: self.upvote_ttl_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = Cli::parse_from(["crimedb-init"]);
        let config = cli.into_config();
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "nosql-la-crime");
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.min_pool_size, 1);
        assert_eq!(config.upvote_ttl_secs, 31_536_000);
        assert!(config.is_valid());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "crimedb-init",
            "--mongodb-uri",
            "mongodb://db:27017",
            "--database",
            "crime-staging",
            "--upvote-ttl-secs",
            "86400",
        ]);
        let config = cli.into_config();
        assert_eq!(config.mongodb_uri, "mongodb://db:27017");
        assert_eq!(config.database_name, "crime-staging");
        assert_eq!(config.upvote_ttl_secs, 86_400);
    }
}
