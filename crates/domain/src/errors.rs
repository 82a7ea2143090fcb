//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MeetLedger
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MeetLedgerError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for MeetLedger operations
pub type Result<T> = std::result::Result<T, MeetLedgerError>;

impl From<serde_json::Error> for MeetLedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
