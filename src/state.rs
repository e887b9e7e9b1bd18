use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use chrono::Utc;

use crate::expansion::ExpandedRows;
use crate::tree::build_document_tree;
use crate::types::{DossierConfig, SourceRecord, SyncRecord, TreeNode};

/// Shared application state for the document tree widget.
///
/// The tree and its expansion set are guarded separately; snapshots taken
/// between two lock acquisitions may interleave with a concurrent install,
/// which is acceptable — the widget re-renders on the next push.
pub struct AppState {
    pub config: RwLock<DossierConfig>,
    pub tree: Mutex<Vec<TreeNode>>,
    pub expanded_rows: Mutex<ExpandedRows>,
    pub sync_history: Mutex<Vec<SyncRecord>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = match load_config() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default config: {}", e);
                DossierConfig::default()
            }
        };

        Self {
            config: RwLock::new(config),
            tree: Mutex::new(Vec::new()),
            expanded_rows: Mutex::new(ExpandedRows::new()),
            sync_history: Mutex::new(Vec::new()),
        }
    }

    /// Replace the current tree with one built from a fresh payload.
    ///
    /// Expansion state is reseeded to just the new root — never carried
    /// over, even when the new payload is for the same account.
    pub fn install_tree(&self, record: &SourceRecord) {
        let forest = build_document_tree(record);
        let root_id = forest.first().map(|node| node.id.clone());

        if let Ok(mut guard) = self.tree.lock() {
            *guard = forest;
        }
        if let Some(root_id) = root_id {
            if let Ok(mut guard) = self.expanded_rows.lock() {
                guard.seed(&root_id);
            }
        }
    }

    /// Get a copy of the current tree (empty before the first install).
    pub fn tree_snapshot(&self) -> Vec<TreeNode> {
        self.tree
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Get the expanded row ids, sorted.
    pub fn expanded_snapshot(&self) -> Vec<String> {
        self.expanded_rows
            .lock()
            .map(|guard| guard.ids())
            .unwrap_or_default()
    }

    /// Check whether one row is currently expanded.
    pub fn is_expanded(&self, row_id: &str) -> bool {
        self.expanded_rows
            .lock()
            .map(|guard| guard.is_expanded(row_id))
            .unwrap_or(false)
    }

    /// Add a sync record to history (newest first).
    pub fn add_sync_record(&self, record: SyncRecord) {
        let cap = self.max_sync_history();

        if let Ok(mut guard) = self.sync_history.lock() {
            guard.insert(0, record);

            // Trim to configured size
            if guard.len() > cap {
                guard.truncate(cap);
            }
        }
    }

    /// Update an existing sync record in place.
    pub fn update_sync_record(&self, id: &str, f: impl FnOnce(&mut SyncRecord)) {
        if let Ok(mut guard) = self.sync_history.lock() {
            if let Some(record) = guard.iter_mut().find(|r| r.id == id) {
                f(record);
            }
        }
    }

    /// Get the most recent sync records.
    pub fn get_sync_history(&self, limit: usize) -> Vec<SyncRecord> {
        self.sync_history
            .lock()
            .map(|guard| guard.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    fn max_sync_history(&self) -> usize {
        self.config
            .read()
            .map(|guard| guard.max_sync_history)
            .unwrap_or_else(|_| DossierConfig::default().max_sync_history)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mark a sync record finished with its outcome.
pub fn finish_sync_record(state: &AppState, id: &str, success: bool, message: &str) {
    state.update_sync_record(id, |record| {
        record.finished_at = Some(Utc::now());
        record.success = success;
        record.message = Some(message.to_string());
    });
}

/// Get the canonical config file path (~/.dossier/config.json)
pub fn config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".dossier").join("config.json"))
}

/// Load configuration from ~/.dossier/config.json
pub fn load_config() -> Result<DossierConfig, String> {
    load_config_from(&config_path()?)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<DossierConfig, String> {
    if !path.exists() {
        return Err(format!("Config file not found at {}", path.display()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Reload configuration from disk
pub fn reload_config(state: &AppState) -> Result<DossierConfig, String> {
    let config = load_config()?;
    let mut guard = state.config.write().map_err(|_| "Lock poisoned")?;
    *guard = config.clone();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{create_sync_record, SyncDirection};
    use std::io::Write;

    fn demo_record() -> SourceRecord {
        crate::devtools::demo_record()
    }

    #[test]
    fn test_install_tree_seeds_root() {
        let state = AppState::new();
        let record = demo_record();
        state.install_tree(&record);

        let tree = state.tree_snapshot();
        assert_eq!(tree.len(), 1);
        assert_eq!(state.expanded_snapshot(), vec![record.account_id.clone()]);
        assert!(state.is_expanded(&record.account_id));
    }

    #[test]
    fn test_install_tree_resets_expansion() {
        let state = AppState::new();
        let record = demo_record();
        state.install_tree(&record);

        let opp_id = record.opportunities[0].id.clone();
        if let Ok(mut guard) = state.expanded_rows.lock() {
            guard.toggle(&opp_id);
        }
        assert!(state.is_expanded(&opp_id));

        // Re-installing the same payload still reseeds.
        state.install_tree(&record);
        assert!(!state.is_expanded(&opp_id));
        assert_eq!(state.expanded_snapshot().len(), 1);
    }

    #[test]
    fn test_sync_history_newest_first_and_capped() {
        let state = AppState::new();
        if let Ok(mut config) = state.config.write() {
            config.max_sync_history = 3;
        }

        for i in 0..5 {
            let mut record = create_sync_record(SyncDirection::Upload, "A1");
            record.message = Some(format!("run {}", i));
            state.add_sync_record(record);
        }

        let history = state.get_sync_history(10);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].message.as_deref(), Some("run 4"));
        assert_eq!(history[2].message.as_deref(), Some("run 2"));
    }

    #[test]
    fn test_finish_sync_record() {
        let state = AppState::new();
        let record = create_sync_record(SyncDirection::Retrieve, "A1");
        let id = record.id.clone();
        state.add_sync_record(record);

        finish_sync_record(&state, &id, true, "3 files retrieved");

        let history = state.get_sync_history(1);
        assert!(history[0].success);
        assert!(history[0].finished_at.is_some());
        assert_eq!(history[0].message.as_deref(), Some("3 files retrieved"));
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("config.json")).unwrap_err();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"fileStore": {{"timeoutSecs": 5}}, "maxSyncHistory": 10}}"#
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.max_sync_history, 10);
        assert_eq!(config.file_store.timeout_secs, 5);
        assert!(config.file_store.enabled);
    }

    #[test]
    fn test_load_config_from_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.contains("Failed to parse config"));
    }
}
