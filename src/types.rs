use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Record payload types
// =============================================================================

/// Joined account/opportunity/document payload delivered by the record
/// provider.
///
/// The payload is pre-joined on the backend: one account, its opportunities,
/// and the document titles attached to each entity. It is immutable for the
/// duration of one tree build. Every collection is optional on the wire —
/// absent data degrades to empty, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    pub account_id: String,
    pub account_name: String,
    #[serde(default)]
    pub account_document_titles: Vec<DocumentRef>,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    /// Document titles keyed by opportunity id. An opportunity may be
    /// missing from this map; that means it has no documents.
    #[serde(default)]
    pub opportunity_document_titles_map: HashMap<String, Vec<DocumentRef>>,
}

/// An opportunity under the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub name: String,
}

/// A document title attached to an account or opportunity.
///
/// The title is an opaque attachment label — it is rendered verbatim as the
/// node label, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub id: String,
    pub title: String,
}

// =============================================================================
// Display tree types (consumed by the rendering widget)
// =============================================================================

/// One displayed row in the document tree.
///
/// Invariant: only `Folder` nodes may carry children; `Document` nodes are
/// always leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub icon_kind: IconKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Icon classification for a tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Folder,
    Document,
}

/// Full envelope handed to the tree widget: the forest, the expanded row
/// ids, and the column descriptors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeViewData {
    pub tree: Vec<TreeNode>,
    pub expanded_rows: Vec<String>,
    pub columns: Vec<TreeColumn>,
}

/// Column descriptor for the tree grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeColumn {
    pub label: String,
    pub field_name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub cell_attributes: CellAttributes,
}

/// Per-cell attribute bindings (icon resolved per row).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAttributes {
    pub icon_kind: FieldBinding,
}

/// Binds a cell attribute to a row field by name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    pub field_name: String,
}

/// The single column the document tree renders: the node label as text,
/// with the row's icon bound to the cell.
pub fn tree_columns() -> Vec<TreeColumn> {
    vec![TreeColumn {
        label: "Accounts and its related opportunities".to_string(),
        field_name: "label".to_string(),
        column_type: "text".to_string(),
        cell_attributes: CellAttributes {
            icon_kind: FieldBinding {
                field_name: "iconKind".to_string(),
            },
        },
    }]
}

// =============================================================================
// Sync history types
// =============================================================================

/// Which way a file-store sync action moved documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    Upload,
    Retrieve,
}

impl std::fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncDirection::Upload => write!(f, "upload"),
            SyncDirection::Retrieve => write!(f, "retrieve"),
        }
    }
}

/// Record of one file-store sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRecord {
    pub id: String,
    pub direction: SyncDirection,
    pub record_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Create a fresh sync record for an action that is about to run.
pub fn create_sync_record(direction: SyncDirection, record_id: &str) -> SyncRecord {
    SyncRecord {
        id: uuid::Uuid::new_v4().to_string(),
        direction,
        record_id: record_id.to_string(),
        started_at: Utc::now(),
        finished_at: None,
        success: false,
        message: None,
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration stored in ~/.dossier/config.json.
///
/// Every field has a serde default so the crate works unconfigured: a
/// missing file yields `DossierConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DossierConfig {
    #[serde(default)]
    pub file_store: crate::filestore::FileStoreConfig,
    /// How many sync records to keep in memory.
    #[serde(default = "default_max_sync_history")]
    pub max_sync_history: usize,
}

fn default_max_sync_history() -> usize {
    100
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            file_store: crate::filestore::FileStoreConfig::default(),
            max_sync_history: default_max_sync_history(),
        }
    }
}
