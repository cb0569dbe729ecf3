//! Schema provisioner for the LA crime-report MongoDB database.
//!
//! This crate creates the collections and indexes the crime database
//! expects before any application traffic reaches it. It is meant to run
//! once at provisioning time, but every operation is idempotent so the
//! tool can safely be re-run against an already-initialized database.
//!
//! ## What gets provisioned
//!
//! Four collections (`crimes`, `victims`, `weapons`, `upvotes`) and ten
//! indexes, including:
//!
//! - a unique index on `crimes.DR_NO` rejecting duplicate report numbers
//! - a `2dsphere` index on `crimes.location.coordinates` for proximity
//!   queries
//! - a TTL index on `upvotes.upvote_date` so the engine removes upvotes
//!   one year after they were cast (configurable)
//!
//! ## Key properties
//!
//! - **Idempotency**: existing collections are skipped and index
//!   creation with an identical spec is an engine-level no-op
//! - **No recovery logic**: any engine error propagates to the caller;
//!   the binary exits non-zero
//! - **Referential integrity by convention**: `crime_id` back-references
//!   are not enforced by the engine

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod mongodb;
pub mod provision;

pub use config::ProvisionConfig;
pub use error::{ProvisionError, ProvisionResult};
pub use provision::{MongoTarget, Provisioner, SchemaSummary};
