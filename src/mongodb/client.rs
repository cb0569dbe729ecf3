//! MongoDB connection management.

use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, ProvisionResult};
use crate::mongodb::collections::{
    CRIMES_COLLECTION, UPVOTES_COLLECTION, VICTIMS_COLLECTION, WEAPONS_COLLECTION,
};
use crate::mongodb::models::{CrimeDocument, UpvoteDocument, VictimDocument, WeaponDocument};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Collection, Database};
use std::time::Duration;

/// MongoDB client wrapper for the crime database.
pub struct MongoClient {
    client: mongodb::Client,
    database: Database,
}

impl MongoClient {
    /// Creates a new MongoDB client and pings the deployment.
    pub async fn new(config: &ProvisionConfig) -> ProvisionResult<Self> {
        if !config.is_valid() {
            return Err(ProvisionError::InvalidConfig(
                "MongoDB URI, database name and upvote TTL must be set".to_string(),
            ));
        }

        let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
        options.max_pool_size = Some(config.pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = mongodb::Client::with_options(options)?;
        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        let database = client.database(&config.database_name);
        Ok(Self { client, database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn client(&self) -> &mongodb::Client {
        &self.client
    }

    pub fn crimes(&self) -> Collection<CrimeDocument> {
        self.database.collection(CRIMES_COLLECTION)
    }

    pub fn victims(&self) -> Collection<VictimDocument> {
        self.database.collection(VICTIMS_COLLECTION)
    }

    pub fn weapons(&self) -> Collection<WeaponDocument> {
        self.database.collection(WEAPONS_COLLECTION)
    }

    pub fn upvotes(&self) -> Collection<UpvoteDocument> {
        self.database.collection(UPVOTES_COLLECTION)
    }
}
