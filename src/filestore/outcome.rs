//! Classifying file-store replies.
//!
//! The store reports server-side failures in-band: an `Ok` reply whose text
//! starts with the configured marker (`Error:` by default) is a failure.
//! Transport errors collapse into the same failure shape, so everything
//! downstream (toasts, sync history) handles exactly two cases.

use crate::notification::Toast;
use crate::types::SyncDirection;

use super::FileStoreError;

/// Final result of one sync action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Success(String),
    Failure(String),
}

impl SyncOutcome {
    /// Classify a raw store reply against the failure marker.
    ///
    /// An empty marker would prefix-match every reply, so it disables
    /// in-band failure detection instead; transport errors still fail.
    pub fn from_reply(reply: Result<String, FileStoreError>, marker: &str) -> Self {
        match reply {
            Ok(text) if !marker.is_empty() && text.starts_with(marker) => {
                SyncOutcome::Failure(text)
            }
            Ok(text) => SyncOutcome::Success(text),
            Err(err) => SyncOutcome::Failure(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SyncOutcome::Success(msg) | SyncOutcome::Failure(msg) => msg,
        }
    }

    /// Build the toast for this outcome.
    ///
    /// Failure toasts keep the store's reply verbatim after the action
    /// prefix, so a marker-flagged reply reads like
    /// "Error uploading files: Error: quota exceeded" — the duplication is
    /// the store's text, not ours to clean up.
    pub fn into_toast(self, direction: SyncDirection) -> Toast {
        match self {
            SyncOutcome::Success(msg) => Toast::success("Success", &msg),
            SyncOutcome::Failure(msg) => {
                let prefixed = match direction {
                    SyncDirection::Upload => format!("Error uploading files: {}", msg),
                    SyncDirection::Retrieve => format!("Error retrieving files: {}", msg),
                };
                Toast::error("Error", &prefixed)
            }
        }
    }
}
