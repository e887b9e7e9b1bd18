//! Row-action dispatch for the tree widget.
//!
//! The widget reports every row action it fires; only `expand` belongs to
//! us. Anything else (built-in sort, inline edit, actions added by a future
//! widget version) is ignored without error so the widget can evolve
//! independently.

use serde::Deserialize;

use crate::expansion::ExpandedRows;

/// Action names carried by row-action events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Expand,
    Other(String),
}

impl RowAction {
    pub fn from_name(name: &str) -> Self {
        match name {
            "expand" => RowAction::Expand,
            other => RowAction::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RowAction::Expand => "expand",
            RowAction::Other(name) => name,
        }
    }
}

/// One row-action event from the widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowActionEvent {
    pub action: String,
    pub row_id: String,
}

/// Route a row-action event: `expand` toggles the row, everything else is
/// dropped.
pub fn apply_row_action(expanded: &mut ExpandedRows, event: &RowActionEvent) {
    let action = RowAction::from_name(&event.action);
    match action {
        RowAction::Expand => expanded.toggle(&event.row_id),
        RowAction::Other(_) => {
            log::debug!(
                "Ignoring row action '{}' on row {}",
                action.name(),
                event.row_id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(action: &str, row_id: &str) -> RowActionEvent {
        RowActionEvent {
            action: action.to_string(),
            row_id: row_id.to_string(),
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RowAction::from_name("expand"), RowAction::Expand);
        assert_eq!(
            RowAction::from_name("delete"),
            RowAction::Other("delete".to_string())
        );
        // Case sensitive by contract.
        assert_eq!(
            RowAction::from_name("Expand"),
            RowAction::Other("Expand".to_string())
        );
    }

    #[test]
    fn test_name_round_trips() {
        assert_eq!(RowAction::from_name("expand").name(), "expand");
        assert_eq!(RowAction::from_name("delete").name(), "delete");
    }

    #[test]
    fn test_expand_toggles_row() {
        let mut rows = ExpandedRows::new();
        rows.seed("A1");

        apply_row_action(&mut rows, &event("expand", "O1"));
        assert!(rows.is_expanded("O1"));

        apply_row_action(&mut rows, &event("expand", "O1"));
        assert!(!rows.is_expanded("O1"));
    }

    #[test]
    fn test_unknown_action_leaves_state_untouched() {
        let mut rows = ExpandedRows::new();
        rows.seed("A1");
        rows.toggle("O1");
        let before = rows.ids();

        apply_row_action(&mut rows, &event("delete", "O1"));
        apply_row_action(&mut rows, &event("sort", "A1"));

        assert_eq!(rows.ids(), before);
    }

    #[test]
    fn test_event_deserializes_camel_case() {
        let event: RowActionEvent =
            serde_json::from_str(r#"{"action":"expand","rowId":"O1"}"#).unwrap();
        assert_eq!(event.action, "expand");
        assert_eq!(event.row_id, "O1");
    }
}
