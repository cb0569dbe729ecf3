use anyhow::Context;
use clap::Parser as _;
use crimedb_init::cli::Cli;
use crimedb_init::logging::init_logging;
use crimedb_init::mongodb::MongoClient;
use crimedb_init::provision::{MongoTarget, Provisioner};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = cli.into_config();
    info!(
        database = %config.database_name,
        upvote_ttl_secs = config.upvote_ttl_secs,
        "Provisioning crime database schema"
    );

    let client = MongoClient::new(&config).await.context("Connecting to MongoDB")?;
    let target = MongoTarget::new(client.database().clone());
    let provisioner = Provisioner::new(config);
    let summary = provisioner.apply(&target).await.context("Applying schema")?;

    info!(
        collections_created = summary.collections_created.len(),
        collections_existing = summary.collections_existing.len(),
        indexes_ensured = summary.indexes_ensured,
        "Schema provisioning complete"
    );

    Ok(())
}
