//! LaTeX document rendering.
//!
//! Pure string construction over the records in `models`: no I/O and no
//! shared state, so concurrent callers need no coordination. All
//! user-supplied text flows through `escape::latex_escape` before
//! concatenation; the emitted source is meant to compile under XeLaTeX for
//! any legal UTF-8 input.

pub mod cover_letter;
pub mod layout;
pub mod preamble;
pub mod resume;

pub use cover_letter::render_cover_letter;
pub use layout::{layout_profile, LayoutProfile};
pub use resume::render_resume;
