//! Remote file-store integration.
//!
//! The store lives on the other side of a host-supplied client; this module
//! owns the seam trait, its configuration, and the outcome mapping. The
//! store's reply protocol is stringly: one line of text per action, with
//! failures signalled by a marker prefix rather than a transport error (see
//! [`outcome`]).

pub mod outcome;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File-store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStoreConfig {
    /// Master switch for both sync actions.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Prefix the store puts on replies that report a server-side failure.
    /// Empty disables in-band failure detection.
    #[serde(default = "default_error_marker")]
    pub error_marker: String,
    /// Per-action deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_error_marker() -> String {
    "Error:".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            error_marker: default_error_marker(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("File store is not connected")]
    NotConnected,
    #[error("File store request failed: {0}")]
    RequestFailed(String),
    #[error("File store rejected the request: {0}")]
    RemoteRejected(String),
    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),
}

/// Client for the remote file store.
///
/// Both actions return the store's human-readable reply line. A reply can
/// describe a failure even on the `Ok` path — callers must run it through
/// [`outcome::SyncOutcome::from_reply`] before treating it as a success.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Push the record's local documents to the store.
    async fn upload_documents(&self, parent_record_id: &str) -> Result<String, FileStoreError>;

    /// Pull the record's documents down from the store.
    async fn retrieve_documents(&self, parent_record_id: &str) -> Result<String, FileStoreError>;
}
