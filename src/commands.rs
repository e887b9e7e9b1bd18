//! Command facade for the host shell.
//!
//! Every function here is shaped for a thin binding layer: plain data in,
//! serializable data or `Result<T, String>` out. The host wires these to
//! whatever command transport it uses; nothing in this module knows about
//! the widget beyond the envelope types.

use std::time::Duration;

use serde::Serialize;

use crate::actions::{apply_row_action, RowActionEvent};
use crate::filestore::outcome::SyncOutcome;
use crate::filestore::{FileStore, FileStoreError};
use crate::notification::NotificationSink;
use crate::provider::RecordProvider;
use crate::state::{finish_sync_record, reload_config, AppState};
use crate::types::{
    create_sync_record, tree_columns, DossierConfig, SyncDirection, SyncRecord, TreeViewData,
};

/// Shown in place of the tree before any record has loaded.
const EMPTY_TREE_MESSAGE: &str = "Account documents will appear here once the record loads.";

/// Result type for tree view loading
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TreeViewResult {
    Success { data: TreeViewData },
    Empty { message: String },
    Error { message: String },
}

/// Fetch the record's payload and rebuild the tree.
///
/// A provider failure is logged and absorbed: the widget keeps whatever
/// tree it already shows, or the empty-state message if nothing has loaded
/// yet. The host never sees a fetch error as a user-facing error.
pub async fn load_document_tree(
    state: &AppState,
    provider: &dyn RecordProvider,
    record_id: &str,
) -> TreeViewResult {
    match provider.fetch_record(record_id).await {
        Ok(record) => {
            if let Some(dup) = crate::tree::find_duplicate_id(&record) {
                log::warn!(
                    "Record {} reuses node id '{}'; expansion will toggle every row sharing it",
                    record_id,
                    dup
                );
            }
            state.install_tree(&record);
        }
        Err(e) => {
            log::warn!(
                "Failed to load record {}: {}. Keeping current tree.",
                record_id,
                e
            );
        }
    }

    get_document_tree(state)
}

/// Get the current tree envelope without refetching.
pub fn get_document_tree(state: &AppState) -> TreeViewResult {
    match tree_view_data(state) {
        Ok(data) if data.tree.is_empty() => TreeViewResult::Empty {
            message: EMPTY_TREE_MESSAGE.to_string(),
        },
        Ok(data) => TreeViewResult::Success { data },
        Err(message) => TreeViewResult::Error { message },
    }
}

/// Route one row-action event from the widget.
///
/// Returns the expanded row ids after the event, so the widget can apply
/// the new state in one round trip.
pub fn handle_row_action(state: &AppState, event: &RowActionEvent) -> Result<Vec<String>, String> {
    let mut guard = state.expanded_rows.lock().map_err(|_| "Lock poisoned")?;
    apply_row_action(&mut guard, event);
    Ok(guard.ids())
}

/// Check whether one row is expanded.
pub fn is_row_expanded(state: &AppState, row_id: &str) -> bool {
    state.is_expanded(row_id)
}

/// Push the record's documents to the remote file store.
pub async fn upload_documents(
    state: &AppState,
    store: &dyn FileStore,
    sink: &dyn NotificationSink,
    record_id: &str,
) -> Result<String, String> {
    run_sync(state, store, sink, SyncDirection::Upload, record_id).await
}

/// Pull the record's documents down from the remote file store.
pub async fn retrieve_documents(
    state: &AppState,
    store: &dyn FileStore,
    sink: &dyn NotificationSink,
    record_id: &str,
) -> Result<String, String> {
    run_sync(state, store, sink, SyncDirection::Retrieve, record_id).await
}

/// Get the most recent sync records, newest first.
pub fn get_sync_history(state: &AppState, limit: usize) -> Vec<SyncRecord> {
    state.get_sync_history(limit)
}

/// Get the current configuration.
pub fn get_config(state: &AppState) -> Result<DossierConfig, String> {
    state
        .config
        .read()
        .map(|guard| guard.clone())
        .map_err(|_| "Lock poisoned".to_string())
}

/// Reload configuration from ~/.dossier/config.json.
pub fn reload_configuration(state: &AppState) -> Result<DossierConfig, String> {
    reload_config(state)
}

/// Shared path for both sync actions: record the attempt, call the store
/// under a deadline, classify the reply, finish the record, toast.
async fn run_sync(
    state: &AppState,
    store: &dyn FileStore,
    sink: &dyn NotificationSink,
    direction: SyncDirection,
    record_id: &str,
) -> Result<String, String> {
    let (enabled, marker, timeout_secs) = {
        let config = state.config.read().map_err(|_| "Lock poisoned")?;
        (
            config.file_store.enabled,
            config.file_store.error_marker.clone(),
            config.file_store.timeout_secs,
        )
    };

    if !enabled {
        return Err("File store sync is disabled".to_string());
    }

    let record = create_sync_record(direction, record_id);
    let record_id_in_history = record.id.clone();
    state.add_sync_record(record);

    let call = async {
        match direction {
            SyncDirection::Upload => store.upload_documents(record_id).await,
            SyncDirection::Retrieve => store.retrieve_documents(record_id).await,
        }
    };
    let reply = match tokio::time::timeout(Duration::from_secs(timeout_secs), call).await {
        Ok(reply) => reply,
        Err(_) => Err(FileStoreError::Timeout(timeout_secs)),
    };

    let outcome = SyncOutcome::from_reply(reply, &marker);
    finish_sync_record(
        state,
        &record_id_in_history,
        outcome.is_success(),
        outcome.message(),
    );

    let success = outcome.is_success();
    let message = outcome.message().to_string();
    sink.notify(outcome.into_toast(direction));

    if success {
        Ok(message)
    } else {
        log::warn!(
            "File store {} failed for {}: {}",
            direction,
            record_id,
            message
        );
        Err(message)
    }
}

fn tree_view_data(state: &AppState) -> Result<TreeViewData, String> {
    let tree = state.tree.lock().map_err(|_| "Lock poisoned")?.clone();
    let expanded_rows = state
        .expanded_rows
        .lock()
        .map_err(|_| "Lock poisoned")?
        .ids();

    Ok(TreeViewData {
        tree,
        expanded_rows,
        columns: tree_columns(),
    })
}
