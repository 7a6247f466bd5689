//! Merging rewritten content back into a résumé.
//!
//! The content-rewrite collaborator may alter only the summary, the
//! per-entry experience bullets, and the skill lists. Every other field
//! (companies, titles, locations, dates) must pass through unchanged. That
//! is a hard contract, and this module is where it is enforced: whatever
//! the rewrite produced, only the allowed fields are merged.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ResumeDocument, Skills};

/// The fields a rewrite pass is allowed to change.
///
/// `experience_bullets` is index-aligned with the document's experience
/// entries; `None` (or a missing tail entry) keeps that entry's original
/// bullets. Surplus entries beyond the document's length are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewritePatch {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience_bullets: Vec<Option<Vec<String>>>,
    #[serde(default)]
    pub skills: Option<Skills>,
}

/// Applies a rewrite patch, merging only the allowed fields.
pub fn apply_patch(doc: &ResumeDocument, patch: &RewritePatch) -> ResumeDocument {
    let mut merged = doc.clone();

    if let Some(summary) = &patch.summary {
        merged.summary = summary.clone();
    }

    for (idx, entry) in merged.experience.iter_mut().enumerate() {
        if let Some(Some(bullets)) = patch.experience_bullets.get(idx) {
            entry.bullets = bullets.clone();
        }
    }
    if patch.experience_bullets.len() > doc.experience.len() {
        warn!(
            patch_entries = patch.experience_bullets.len(),
            document_entries = doc.experience.len(),
            "rewrite patch has more bullet sets than experience entries; surplus ignored"
        );
    }

    if let Some(skills) = &patch.skills {
        merged.skills = skills.clone();
    }

    merged
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, CvStyle, ExperienceEntry, Language};

    fn document() -> ResumeDocument {
        ResumeDocument {
            contact: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: String::new(),
                location: "London".to_string(),
                links: vec![],
            },
            summary: "Original summary".to_string(),
            experience: vec![
                ExperienceEntry {
                    company: "Acme & Co".to_string(),
                    title: "Analyst".to_string(),
                    location: "London".to_string(),
                    start: "Jan 2020".to_string(),
                    end: "Present".to_string(),
                    bullets: vec!["old bullet".to_string()],
                },
                ExperienceEntry {
                    company: "Globex".to_string(),
                    title: "Intern".to_string(),
                    location: "Berlin".to_string(),
                    start: "Jun 2019".to_string(),
                    end: "Dec 2019".to_string(),
                    bullets: vec!["kept as-is".to_string()],
                },
            ],
            education: vec![],
            skills: Skills {
                hard: vec!["Python".to_string()],
                soft: vec![],
                tools: vec![],
            },
            certifications: vec![],
            projects: vec![],
            languages_extra: vec![],
            language: Language::En,
            style: CvStyle::Harvard,
        }
    }

    #[test]
    fn test_only_allowed_fields_change() {
        let doc = document();
        let patch = RewritePatch {
            summary: Some("Polished summary".to_string()),
            experience_bullets: vec![Some(vec!["new bullet".to_string()]), None],
            skills: Some(Skills {
                hard: vec!["Rust".to_string()],
                soft: vec!["Leadership".to_string()],
                tools: vec![],
            }),
        };
        let merged = apply_patch(&doc, &patch);

        assert_eq!(merged.summary, "Polished summary");
        assert_eq!(merged.experience[0].bullets, vec!["new bullet".to_string()]);
        assert_eq!(merged.skills.hard, vec!["Rust".to_string()]);

        // Pass-through invariants: identity fields stay byte-identical.
        assert_eq!(merged.experience[0].company, "Acme & Co");
        assert_eq!(merged.experience[0].title, "Analyst");
        assert_eq!(merged.experience[0].start, "Jan 2020");
        assert_eq!(merged.experience[0].end, "Present");
        assert_eq!(merged.contact.name, "Jane Doe");
    }

    #[test]
    fn test_none_entries_keep_original_bullets() {
        let doc = document();
        let patch = RewritePatch {
            summary: None,
            experience_bullets: vec![None, None],
            skills: None,
        };
        let merged = apply_patch(&doc, &patch);
        assert_eq!(merged.summary, "Original summary");
        assert_eq!(merged.experience[0].bullets, vec!["old bullet".to_string()]);
        assert_eq!(merged.experience[1].bullets, vec!["kept as-is".to_string()]);
    }

    #[test]
    fn test_short_patch_leaves_tail_entries_untouched() {
        let doc = document();
        let patch = RewritePatch {
            experience_bullets: vec![Some(vec!["new".to_string()])],
            ..RewritePatch::default()
        };
        let merged = apply_patch(&doc, &patch);
        assert_eq!(merged.experience[1].bullets, vec!["kept as-is".to_string()]);
    }

    #[test]
    fn test_surplus_patch_entries_are_ignored() {
        let doc = document();
        let patch = RewritePatch {
            experience_bullets: vec![
                None,
                None,
                Some(vec!["no matching entry".to_string()]),
            ],
            ..RewritePatch::default()
        };
        let merged = apply_patch(&doc, &patch);
        assert_eq!(merged.experience.len(), 2);
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: RewritePatch =
            serde_json::from_str(r#"{ "summary": "From the rewrite layer" }"#).unwrap();
        assert_eq!(patch.summary.as_deref(), Some("From the rewrite layer"));
        assert!(patch.experience_bullets.is_empty());
        assert!(patch.skills.is_none());
    }
}
