//! Expanded-row tracking for the document tree.
//!
//! A plain membership set over node ids. The widget owns rendering; this
//! module only answers "which rows are open". Ids here are not validated
//! against the current tree — a toggle for an unknown id just records it,
//! and reseeding on the next build washes stale ids away.

use std::collections::HashSet;

/// Set of currently expanded row ids.
#[derive(Debug, Clone, Default)]
pub struct ExpandedRows {
    ids: HashSet<String>,
}

impl ExpandedRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the initial presentation: only the account root expanded.
    ///
    /// Called on every tree install, so expansion state from a previous
    /// payload never leaks into the next one.
    pub fn seed(&mut self, root_id: &str) {
        self.ids.clear();
        self.ids.insert(root_id.to_string());
    }

    /// Flip one row: expanded becomes collapsed and vice versa.
    pub fn toggle(&mut self, node_id: &str) {
        if self.ids.contains(node_id) {
            self.ids.remove(node_id);
        } else {
            self.ids.insert(node_id.to_string());
        }
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.ids.contains(node_id)
    }

    /// Expanded ids in sorted order, so snapshots of the same state always
    /// serialize identically.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
