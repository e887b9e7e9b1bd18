//! Mock payloads for tests and the preview binary.
//!
//! Fixture ids follow the slug convention the real provider uses, so demo
//! trees read like production data in the widget.

use std::collections::HashMap;

use crate::types::{DocumentRef, Opportunity, SourceRecord};

fn doc(id: &str, title: &str) -> DocumentRef {
    DocumentRef {
        id: id.to_string(),
        title: title.to_string(),
    }
}

/// A populated account: documents at both levels, plus one opportunity
/// deliberately absent from the document map to exercise the empty-folder
/// path.
pub fn demo_record() -> SourceRecord {
    let mut map = HashMap::new();
    map.insert(
        "acme-renewal-2026".to_string(),
        vec![
            doc("doc-renewal-quote", "Renewal Quote.pdf"),
            doc("doc-renewal-terms", "Terms Addendum.docx"),
        ],
    );
    map.insert(
        "acme-expansion-emea".to_string(),
        vec![doc("doc-emea-proposal", "EMEA Proposal.pdf")],
    );
    // "acme-pilot-apac" intentionally has no entry here.

    SourceRecord {
        account_id: "acme-corp".to_string(),
        account_name: "Acme Corp".to_string(),
        account_document_titles: vec![
            doc("doc-msa", "Master Service Agreement.pdf"),
            doc("doc-org-chart", "Org Chart.png"),
        ],
        opportunities: vec![
            Opportunity {
                id: "acme-renewal-2026".to_string(),
                name: "Renewal 2026".to_string(),
            },
            Opportunity {
                id: "acme-expansion-emea".to_string(),
                name: "Expansion EMEA".to_string(),
            },
            Opportunity {
                id: "acme-pilot-apac".to_string(),
                name: "Pilot APAC".to_string(),
            },
        ],
        opportunity_document_titles_map: map,
    }
}

/// An account with no documents and no opportunities.
pub fn empty_record() -> SourceRecord {
    SourceRecord {
        account_id: "globex-industries".to_string(),
        account_name: "Globex Industries".to_string(),
        account_document_titles: Vec::new(),
        opportunities: Vec::new(),
        opportunity_document_titles_map: HashMap::new(),
    }
}
