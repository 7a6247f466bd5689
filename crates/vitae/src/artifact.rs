//! Download packaging for rendered documents.
//!
//! Pairs a rendered source string with a deterministic filename and content
//! type. The content itself is never transformed here.

use crate::models::{CoverLetterDocument, ResumeDocument};

/// Content type for emitted LaTeX source.
pub const TEX_CONTENT_TYPE: &str = "application/x-tex";

/// A rendered document ready for delivery as a download.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub content: String,
}

/// Packages rendered résumé source as `CV_<name>_<STYLE>_<LANG>.tex`.
pub fn resume_artifact(doc: &ResumeDocument, content: String) -> RenderedArtifact {
    RenderedArtifact {
        filename: format!(
            "CV_{}_{}_{}.tex",
            safe_file_name(&doc.contact.name),
            doc.style.code(),
            doc.language.code()
        ),
        content_type: TEX_CONTENT_TYPE,
        content,
    }
}

/// Packages rendered cover-letter source as `CoverLetter_<name>_<LANG>.tex`.
pub fn cover_letter_artifact(doc: &CoverLetterDocument, content: String) -> RenderedArtifact {
    RenderedArtifact {
        filename: format!(
            "CoverLetter_{}_{}.tex",
            safe_file_name(&doc.contact.name),
            doc.language.code()
        ),
        content_type: TEX_CONTENT_TYPE,
        content,
    }
}

/// Replaces every non-alphanumeric character with `_` so any contact name
/// yields a portable filename.
fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
