//! MongoDB index definitions.
//!
//! One function per collection, returning the index models the
//! provisioner creates. `createIndexes` with an identical spec is a
//! no-op, so these are safe to re-apply.
//!
//! Indexes:
//! - crimes: `{ "DR_NO": 1 }` unique, `{ "crime_code": 1 }`,
//!   `{ "date_occurred": -1 }`, `{ "location.coordinates": "2dsphere" }`
//! - victims: `{ "crime_id": 1 }`
//! - weapons: `{ "crime_id": 1 }`
//! - upvotes: `{ "crime_id": 1 }`, `{ "officer.email": 1 }`,
//!   `{ "officer.badge_number": 1 }`, `{ "upvote_date": 1 }` with TTL

use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use std::time::Duration;

pub fn crime_index_models() -> Vec<IndexModel> {
    vec![
        IndexModel::builder()
            .keys(doc! { "DR_NO": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build(),
        IndexModel::builder().keys(doc! { "crime_code": 1 }).build(),
        IndexModel::builder().keys(doc! { "date_occurred": -1 }).build(),
        IndexModel::builder().keys(doc! { "location.coordinates": "2dsphere" }).build(),
    ]
}

pub fn victim_index_models() -> Vec<IndexModel> {
    vec![IndexModel::builder().keys(doc! { "crime_id": 1 }).build()]
}

pub fn weapon_index_models() -> Vec<IndexModel> {
    vec![IndexModel::builder().keys(doc! { "crime_id": 1 }).build()]
}

/// `expire_after` is the delay after `upvote_date` at which the engine
/// deletes an upvote.
pub fn upvote_index_models(expire_after: Duration) -> Vec<IndexModel> {
    vec![
        IndexModel::builder().keys(doc! { "crime_id": 1 }).build(),
        IndexModel::builder().keys(doc! { "officer.email": 1 }).build(),
        IndexModel::builder().keys(doc! { "officer.badge_number": 1 }).build(),
        IndexModel::builder()
            .keys(doc! { "upvote_date": 1 })
            .options(IndexOptions::builder().expire_after(expire_after).build())
            .build(),
    ]
}
