//! Cover-letter document record.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ContactInfo, Language};

/// The cover-letter record handed to `render::render_cover_letter`.
///
/// `paragraphs` is the letter body in supplied order; each paragraph is
/// escaped as a whole block, with no internal structure interpreted. When
/// `hiring_manager` is absent the renderer addresses the fixed placeholder
/// recipient instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterDocument {
    pub contact: ContactInfo,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_without_hiring_manager() {
        let json = r#"{
            "contact": { "name": "Jane Doe" },
            "company_name": "Acme",
            "job_title": "Analyst",
            "paragraphs": ["First.", "Second."],
            "language": "EN"
        }"#;
        let doc: CoverLetterDocument = serde_json::from_str(json).unwrap();
        assert!(doc.hiring_manager.is_none());
        assert_eq!(doc.paragraphs.len(), 2);
    }
}
