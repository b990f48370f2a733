//! Intelligence documents (RELINT, RELINFO, trackings, clippings).

use crate::labels::Priority;
use crate::resource::{contains_ci, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sgir_types::Regional;

/// Review state of an intelligence document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocStatus {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Em Análise")]
    EmAnalise,
    #[serde(rename = "Aprovado")]
    Aprovado,
}

/// An intelligence document.
///
/// `shared_with` lists additional regions the authoring region chose
/// to distribute the document to; it is informational metadata — the
/// visibility decision still rests solely on `regional` and the
/// access policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelDocument {
    /// Document reference, e.g. `RELINT-001`.
    pub id: String,
    /// Document category label (`RELINT`, `RELINFO`, `Tracking`, `Clipping`).
    #[serde(rename = "type")]
    pub doc_type: String,
    pub title: String,
    /// Directory name of the author.
    pub author: String,
    pub regional: Regional,
    pub status: DocStatus,
    pub content: String,
    /// Regions the document was explicitly shared with.
    #[serde(default)]
    pub shared_with: Vec<Regional>,
    pub created_at: NaiveDate,
    pub priority: Priority,
    /// Classification label (`Interno`, `Restrito`, `Confidencial`).
    pub classification: String,
}

impl Resource for IntelDocument {
    fn regional(&self) -> Regional {
        self.regional
    }

    /// Searches title and content.
    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle) || contains_ci(&self.content, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> IntelDocument {
        IntelDocument {
            id: "RELINFO-003".into(),
            doc_type: "RELINFO".into(),
            title: "Atividade Portuária Incomum".into(),
            author: "Geovana".into(),
            regional: Regional::SpPorto,
            status: DocStatus::Aprovado,
            content: "Detectado aumento de drones não autorizados.".into(),
            shared_with: vec![Regional::Sp],
            created_at: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
            priority: Priority::Alta,
            classification: "Confidencial".into(),
        }
    }

    #[test]
    fn searches_title_and_content() {
        let doc = doc();
        assert!(doc.matches_text("portuária"));
        assert!(doc.matches_text("DRONES"));
        assert!(!doc.matches_text("sindicato"));
    }

    #[test]
    fn status_wire_values() {
        let status: DocStatus = serde_json::from_str("\"Em Análise\"").unwrap();
        assert_eq!(status, DocStatus::EmAnalise);
    }

    #[test]
    fn deserializes_seed_shape() {
        let json = r#"{
            "id": "RELINT-001",
            "type": "RELINT",
            "title": "t",
            "author": "Fábio",
            "regional": "SP",
            "status": "Aprovado",
            "content": "c",
            "sharedWith": ["MS"],
            "createdAt": "2024-01-16",
            "priority": "Alta",
            "classification": "Confidencial"
        }"#;

        let doc: IntelDocument = serde_json::from_str(json).expect("seed shape");
        assert_eq!(doc.doc_type, "RELINT");
        assert_eq!(doc.shared_with, vec![Regional::Ms]);
        assert_eq!(doc.regional(), Regional::Sp);
    }
}
