//! Caller-side document validation.
//!
//! The renderers are total and degrade gracefully on thin input; rejecting
//! unusable documents is the caller's responsibility. These checks are that
//! contract, applied by the CLI (and any other front end) before rendering.

use thiserror::Error;

use crate::models::{CoverLetterDocument, ResumeDocument};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("contact name is required")]
    MissingContactName,

    #[error("at least a summary or one experience entry is required")]
    EmptyResume,

    #[error("at least one cover letter paragraph is required")]
    EmptyCoverLetter,
}

/// Checks that a résumé has enough content to be worth rendering.
pub fn validate_resume(doc: &ResumeDocument) -> Result<(), ValidationError> {
    if doc.contact.name.trim().is_empty() {
        return Err(ValidationError::MissingContactName);
    }
    if doc.summary.trim().is_empty() && doc.experience.is_empty() {
        return Err(ValidationError::EmptyResume);
    }
    Ok(())
}

/// Checks that a cover letter has a sender and at least one body paragraph.
pub fn validate_cover_letter(doc: &CoverLetterDocument) -> Result<(), ValidationError> {
    if doc.contact.name.trim().is_empty() {
        return Err(ValidationError::MissingContactName);
    }
    if !doc.paragraphs.iter().any(|p| !p.trim().is_empty()) {
        return Err(ValidationError::EmptyCoverLetter);
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
