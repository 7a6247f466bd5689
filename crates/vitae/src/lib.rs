//! Vitae: résumé and cover-letter rendering to XeLaTeX source.
//!
//! The crate takes structured candidate records and emits complete,
//! compilable LaTeX documents in one of two layout variants. Rendering is
//! pure string construction with byte-identical output for identical input,
//! so it is safe to call concurrently from any number of callers. All
//! user-supplied text is escaped so arbitrary input can never alter the
//! structure of the emitted markup; compiling the result to a PDF is left
//! to an external XeLaTeX toolchain.

pub mod artifact;
pub mod escape;
pub mod models;
pub mod render;
pub mod rewrite;
pub mod validation;

pub use escape::latex_escape;
pub use models::{
    ContactInfo, CoverLetterDocument, CvStyle, EducationEntry, ExperienceEntry, Language,
    ResumeDocument, Skills,
};
pub use render::{render_cover_letter, render_resume};
