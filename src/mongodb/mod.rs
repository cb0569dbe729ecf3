//! MongoDB integration: connection management, collection names, index
//! definitions and typed document models.

pub mod client;
pub mod collections;
pub mod indexes;
pub mod models;

pub use client::MongoClient;
pub use models::{
    AreaDoc, CrimeDocument, LocationDoc, OfficerDoc, StatusDoc, UpvoteDocument, VictimDocument,
    WeaponDocument,
};
