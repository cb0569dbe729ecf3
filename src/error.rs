//! Error types for schema provisioning.

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

pub type ProvisionResult<T> = Result<T, ProvisionError>;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Returns true if the error is a duplicate-key write error (code 11000),
/// e.g. an insert violating the unique `DR_NO` index.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

/// Returns true if the error is a `NamespaceExists` command error
/// (code 48), raised by `createCollection` when the collection already
/// exists.
pub fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(&*err.kind, ErrorKind::Command(command_error) if command_error.code == 48)
}
