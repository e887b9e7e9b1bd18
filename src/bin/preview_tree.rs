//! Headless preview of the document tree widget core.
//!
//! Builds the fixture tree, prints the widget envelope as JSON, then walks
//! one expand/collapse round trip and both file-store sync actions against
//! stub collaborators. Useful for eyeballing the wire format without a
//! host shell.
//!
//! Usage: `cargo run --bin preview_tree`

use async_trait::async_trait;

use dossier::actions::RowActionEvent;
use dossier::commands::{
    handle_row_action, load_document_tree, retrieve_documents, upload_documents,
};
use dossier::devtools::demo_record;
use dossier::filestore::{FileStore, FileStoreError};
use dossier::notification::LogSink;
use dossier::provider::{ProviderError, RecordProvider};
use dossier::state::AppState;
use dossier::types::SourceRecord;

/// Provider that always serves the demo fixture.
struct FixtureProvider;

#[async_trait]
impl RecordProvider for FixtureProvider {
    async fn fetch_record(&self, _record_id: &str) -> Result<SourceRecord, ProviderError> {
        Ok(demo_record())
    }
}

/// Store with canned replies: uploads succeed, retrieves come back with the
/// store's in-band failure marker.
struct PreviewStore;

#[async_trait]
impl FileStore for PreviewStore {
    async fn upload_documents(&self, parent_record_id: &str) -> Result<String, FileStoreError> {
        Ok(format!("2 files uploaded for {}", parent_record_id))
    }

    async fn retrieve_documents(&self, _parent_record_id: &str) -> Result<String, FileStoreError> {
        Ok("Error: remote folder not found".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    env_logger::init();

    let state = AppState::new();
    let record = demo_record();

    let result = load_document_tree(&state, &FixtureProvider, &record.account_id).await;
    let envelope =
        serde_json::to_string_pretty(&result).map_err(|e| format!("Serialize error: {}", e))?;
    println!("{}", envelope);

    // One expand/collapse round trip on the first opportunity.
    let event = RowActionEvent {
        action: "expand".to_string(),
        row_id: record.opportunities[0].id.clone(),
    };
    let expanded = handle_row_action(&state, &event)?;
    println!("expanded after toggle: {:?}", expanded);
    let expanded = handle_row_action(&state, &event)?;
    println!("expanded after second toggle: {:?}", expanded);

    // Both sync actions; the retrieve reply carries the failure marker.
    let sink = LogSink;
    match upload_documents(&state, &PreviewStore, &sink, &record.account_id).await {
        Ok(message) => println!("upload ok: {}", message),
        Err(message) => println!("upload failed: {}", message),
    }
    match retrieve_documents(&state, &PreviewStore, &sink, &record.account_id).await {
        Ok(message) => println!("retrieve ok: {}", message),
        Err(message) => println!("retrieve failed: {}", message),
    }

    Ok(())
}
