//! Data records consumed by the renderers.
//!
//! All records are immutable inputs: constructed once (usually from JSON),
//! read by a renderer, then discarded. Nothing here is persisted.

pub mod cover_letter;
pub mod resume;

pub use cover_letter::CoverLetterDocument;
pub use resume::{
    ContactInfo, CvStyle, EducationEntry, ExperienceEntry, Language, ResumeDocument, Skills,
};
