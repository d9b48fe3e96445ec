use thiserror::Error;

use crate::domain::common::RecordId;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown customer: {0}")]
    UnknownCustomer(RecordId),
    #[error("Unknown supplier: {0}")]
    UnknownSupplier(RecordId),
}
