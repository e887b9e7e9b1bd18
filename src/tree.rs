//! Tree construction: flat joined record -> display forest.
//!
//! Pure transformation with no I/O and no shared state. The builder walks the
//! source record exactly once and emits the forest in source order: account
//! root, account documents, then one folder per opportunity with its
//! documents. Node ids are the entity ids from the payload, carried through
//! unchanged.

use std::collections::HashSet;

use crate::types::{DocumentRef, IconKind, SourceRecord, TreeNode};

/// Build the display forest for one source record.
///
/// Always returns a forest of length 1: the account root. Folder icons go on
/// the account and opportunity rows, document icons on the leaves. An
/// opportunity absent from the document map gets an empty folder, not an
/// error.
pub fn build_document_tree(record: &SourceRecord) -> Vec<TreeNode> {
    let mut children: Vec<TreeNode> = Vec::with_capacity(
        record.account_document_titles.len() + record.opportunities.len(),
    );

    for doc in &record.account_document_titles {
        children.push(document_leaf(doc));
    }

    for opportunity in &record.opportunities {
        let docs = record
            .opportunity_document_titles_map
            .get(&opportunity.id)
            .map(|docs| docs.iter().map(document_leaf).collect())
            .unwrap_or_default();

        children.push(TreeNode {
            id: opportunity.id.clone(),
            label: opportunity.name.clone(),
            icon_kind: IconKind::Folder,
            children: docs,
        });
    }

    vec![TreeNode {
        id: record.account_id.clone(),
        label: record.account_name.clone(),
        icon_kind: IconKind::Folder,
        children,
    }]
}

fn document_leaf(doc: &DocumentRef) -> TreeNode {
    TreeNode {
        id: doc.id.clone(),
        label: doc.title.clone(),
        icon_kind: IconKind::Document,
        children: Vec::new(),
    }
}

/// Total node count across a forest, children included.
pub fn count_nodes(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

/// Scan a source record for an id that appears more than once.
///
/// Unique ids across the payload are the caller's contract; this scan exists
/// so a violation gets logged instead of silently mis-toggling rows that
/// share an id. Returns the first duplicate found, in payload order.
pub fn find_duplicate_id(record: &SourceRecord) -> Option<String> {
    let mut ids: Vec<&str> = vec![record.account_id.as_str()];
    for doc in &record.account_document_titles {
        ids.push(&doc.id);
    }
    for opportunity in &record.opportunities {
        ids.push(&opportunity.id);
        if let Some(docs) = record.opportunity_document_titles_map.get(&opportunity.id) {
            for doc in docs {
                ids.push(&doc.id);
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    ids.into_iter()
        .find(|id| !seen.insert(*id))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Opportunity;
    use std::collections::HashMap;

    fn doc(id: &str, title: &str) -> DocumentRef {
        DocumentRef {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn opp(id: &str, name: &str) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn full_record() -> SourceRecord {
        let mut map = HashMap::new();
        map.insert("O1".to_string(), vec![doc("D2", "Quote.pdf")]);
        map.insert(
            "O2".to_string(),
            vec![doc("D3", "Contract.pdf"), doc("D4", "SOW.pdf")],
        );
        SourceRecord {
            account_id: "A1".to_string(),
            account_name: "Acme".to_string(),
            account_document_titles: vec![doc("D1", "Overview.pdf")],
            opportunities: vec![opp("O1", "Opp1"), opp("O2", "Opp2")],
            opportunity_document_titles_map: map,
        }
    }

    #[test]
    fn test_build_shape_and_order() {
        let forest = build_document_tree(&full_record());
        assert_eq!(forest.len(), 1);

        let root = &forest[0];
        assert_eq!(root.id, "A1");
        assert_eq!(root.label, "Acme");
        assert_eq!(root.icon_kind, IconKind::Folder);

        // Account documents come before opportunity folders, both in
        // payload order.
        let ids: Vec<&str> = root.children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["D1", "O1", "O2"]);

        let opp2 = &root.children[2];
        assert_eq!(opp2.icon_kind, IconKind::Folder);
        let opp2_docs: Vec<&str> = opp2.children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(opp2_docs, vec!["D3", "D4"]);
        assert_eq!(opp2.children[0].icon_kind, IconKind::Document);
    }

    #[test]
    fn test_documents_are_always_leaves() {
        let forest = build_document_tree(&full_record());
        fn assert_leaves(node: &TreeNode) {
            if node.icon_kind == IconKind::Document {
                assert!(node.children.is_empty());
            }
            for child in &node.children {
                assert_leaves(child);
            }
        }
        assert_leaves(&forest[0]);
    }

    #[test]
    fn test_account_with_no_related_data() {
        let record = SourceRecord {
            account_id: "A1".to_string(),
            account_name: "Acme".to_string(),
            account_document_titles: Vec::new(),
            opportunities: Vec::new(),
            opportunity_document_titles_map: HashMap::new(),
        };
        let forest = build_document_tree(&record);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, "A1");
        assert!(forest[0].children.is_empty());
        // Still a folder even with nothing under it.
        assert_eq!(forest[0].icon_kind, IconKind::Folder);
    }

    #[test]
    fn test_opportunity_missing_from_map_gets_empty_folder() {
        let mut record = full_record();
        record.opportunity_document_titles_map.remove("O1");

        let forest = build_document_tree(&record);
        let opp1 = &forest[0].children[1];
        assert_eq!(opp1.id, "O1");
        assert_eq!(opp1.icon_kind, IconKind::Folder);
        assert!(opp1.children.is_empty());
        // The rest of the tree is unaffected.
        assert_eq!(forest[0].children[2].children.len(), 2);
    }

    #[test]
    fn test_duplicate_titles_stay_distinct_rows() {
        let mut record = full_record();
        record.account_document_titles = vec![doc("D1", "Quote.pdf"), doc("D9", "Quote.pdf")];

        let forest = build_document_tree(&record);
        let labels: Vec<&str> = forest[0]
            .children
            .iter()
            .take(2)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Quote.pdf", "Quote.pdf"]);
        assert_ne!(forest[0].children[0].id, forest[0].children[1].id);
    }

    #[test]
    fn test_count_nodes() {
        let forest = build_document_tree(&full_record());
        // Root + D1 + O1 + D2 + O2 + D3 + D4.
        assert_eq!(count_nodes(&forest), 7);
        assert_eq!(count_nodes(&[]), 0);
    }

    #[test]
    fn test_find_duplicate_id_clean_record() {
        assert_eq!(find_duplicate_id(&full_record()), None);
    }

    #[test]
    fn test_find_duplicate_id_across_levels() {
        let mut record = full_record();
        // Same id as an account document, reused by an opportunity document.
        record
            .opportunity_document_titles_map
            .insert("O1".to_string(), vec![doc("D1", "Quote.pdf")]);
        assert_eq!(find_duplicate_id(&record), Some("D1".to_string()));
    }
}
