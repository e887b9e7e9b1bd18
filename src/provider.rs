//! Record provider seam.
//!
//! The host supplies the joined account payload; this crate never talks to
//! the backing store directly. Provider failures are logged and absorbed at
//! the command layer — the tree on screen is never torn down by a failed
//! refresh.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::SourceRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Failed to parse record payload: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of joined account/opportunity/document payloads.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Fetch the joined payload for one account record.
    async fn fetch_record(&self, record_id: &str) -> Result<SourceRecord, ProviderError>;
}
