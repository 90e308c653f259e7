// tvl-common/src/error.rs

use thiserror::Error;

/// Error types for snapshot ingestion
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}
