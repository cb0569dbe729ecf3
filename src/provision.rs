//! Applies the crime database schema: collections and indexes.

use crate::config::ProvisionConfig;
use crate::error::{is_namespace_exists, ProvisionResult};
use crate::metrics::ProvisionMetrics;
use crate::mongodb::collections::{
    CRIMES_COLLECTION, UPVOTES_COLLECTION, VICTIMS_COLLECTION, WEAPONS_COLLECTION,
};
use crate::mongodb::indexes::{
    crime_index_models, upvote_index_models, victim_index_models, weapon_index_models,
};
use async_trait::async_trait;
use mongodb::{Database, IndexModel};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Operations the provisioner needs from the target database.
#[async_trait]
pub trait SchemaTarget: Send + Sync {
    async fn existing_collections(&self) -> ProvisionResult<Vec<String>>;

    /// Creates a collection. Returns false if it already existed.
    async fn create_collection(&self, name: &str) -> ProvisionResult<bool>;

    /// Creates indexes on a collection, returning the index names.
    async fn create_indexes(
        &self,
        collection: &str,
        indexes: Vec<IndexModel>,
    ) -> ProvisionResult<Vec<String>>;
}

/// [`SchemaTarget`] backed by a MongoDB database handle.
pub struct MongoTarget {
    database: Database,
}

impl MongoTarget {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl SchemaTarget for MongoTarget {
    async fn existing_collections(&self) -> ProvisionResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn create_collection(&self, name: &str) -> ProvisionResult<bool> {
        match self.database.create_collection(name).await {
            Ok(()) => Ok(true),
            // lost a race against another provisioner run
            Err(err) if is_namespace_exists(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn create_indexes(
        &self,
        collection: &str,
        indexes: Vec<IndexModel>,
    ) -> ProvisionResult<Vec<String>> {
        let result = self
            .database
            .collection::<mongodb::bson::Document>(collection)
            .create_indexes(indexes)
            .await?;
        Ok(result.index_names)
    }
}

/// Outcome of a provisioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSummary {
    pub collections_created: Vec<String>,
    pub collections_existing: Vec<String>,
    pub indexes_ensured: usize,
}

struct CollectionSchema {
    name: &'static str,
    indexes: Vec<IndexModel>,
}

/// The full schema, in the order it is applied.
fn schema(upvote_ttl: Duration) -> Vec<CollectionSchema> {
    vec![
        CollectionSchema { name: CRIMES_COLLECTION, indexes: crime_index_models() },
        CollectionSchema { name: VICTIMS_COLLECTION, indexes: victim_index_models() },
        CollectionSchema { name: WEAPONS_COLLECTION, indexes: weapon_index_models() },
        CollectionSchema { name: UPVOTES_COLLECTION, indexes: upvote_index_models(upvote_ttl) },
    ]
}

/// Creates the crime database collections and indexes.
///
/// All operations are issued sequentially and are idempotent: existing
/// collections are skipped and `createIndexes` with an identical spec is
/// an engine-level no-op. Any other engine error propagates unchanged.
pub struct Provisioner {
    config: ProvisionConfig,
    metrics: Arc<ProvisionMetrics>,
}

impl Provisioner {
    pub fn new(config: ProvisionConfig) -> Self {
        let metrics = Arc::new(ProvisionMetrics::register());
        Self { config, metrics }
    }

    /// Applies the schema against the target and returns a summary.
    pub async fn apply(&self, target: &dyn SchemaTarget) -> ProvisionResult<SchemaSummary> {
        let start = Instant::now();
        let result = self.apply_inner(target).await;
        let duration = start.elapsed();
        self.metrics.provision_latency.record(duration.as_secs_f64(), &[]);

        match &result {
            Ok(summary) => {
                self.metrics.collections_created.add(summary.collections_created.len() as u64, &[]);
                self.metrics.indexes_ensured.add(summary.indexes_ensured as u64, &[]);
                info!(
                    collections_created = summary.collections_created.len(),
                    collections_existing = summary.collections_existing.len(),
                    indexes_ensured = summary.indexes_ensured,
                    duration_ms = %duration.as_millis(),
                    "Schema applied"
                );
            }
            Err(_) => {
                self.metrics.provision_errors.add(1, &[]);
            }
        }

        result
    }

    async fn apply_inner(&self, target: &dyn SchemaTarget) -> ProvisionResult<SchemaSummary> {
        let existing = target.existing_collections().await?;
        let mut summary = SchemaSummary::default();

        for collection in schema(self.config.upvote_ttl()) {
            let name = collection.name.to_string();
            if existing.contains(&name) || !target.create_collection(collection.name).await? {
                debug!(collection = collection.name, "Collection already exists");
                summary.collections_existing.push(name);
            } else {
                info!(collection = collection.name, "Collection created");
                summary.collections_created.push(name);
            }

            let index_names = target.create_indexes(collection.name, collection.indexes).await?;
            debug!(collection = collection.name, indexes = ?index_names, "Indexes ensured");
            summary.indexes_ensured += index_names.len();
        }

        Ok(summary)
    }
}
