//! Cover-letter rendering.
//!
//! Fixed letter skeleton: centered contact header, date directive,
//! recipient block, optional subject line, salutation, body paragraphs,
//! closing. The date is the typesetting engine's own `\today` macro, never
//! a value computed at render time.

use tracing::debug;

use crate::escape::latex_escape;
use crate::models::CoverLetterDocument;
use crate::render::preamble::{build_preamble, PreambleKind};

/// Recipient used when no hiring manager is supplied.
pub const DEFAULT_RECIPIENT: &str = "Hiring Manager";

/// Fixed sign-off word of the closing block.
pub const SIGN_OFF: &str = "Sincerely,";

/// Renders a cover letter document to complete XeLaTeX source.
pub fn render_cover_letter(doc: &CoverLetterDocument) -> String {
    debug!(language = ?doc.language, paragraphs = doc.paragraphs.len(), "rendering cover letter");

    let mut tex = build_preamble(doc.language, PreambleKind::CoverLetter);

    // Centered header: uppercased name, then location, then email/phone.
    let name = latex_escape(&doc.contact.name.to_uppercase());
    tex.push_str("\\begin{center}\n");
    tex.push_str(&format!("{{\\LARGE \\textbf{{{name}}}}}\\\\[4pt]\n"));
    if !doc.contact.location.trim().is_empty() {
        tex.push_str(&latex_escape(doc.contact.location.trim()));
        tex.push_str("\\\\\n");
    }
    let reach: Vec<String> = [&doc.contact.email, &doc.contact.phone]
        .into_iter()
        .filter(|f| !f.trim().is_empty())
        .map(|f| latex_escape(f.trim()))
        .collect();
    if !reach.is_empty() {
        tex.push_str(&reach.join(" $\\bullet$ "));
        tex.push('\n');
    }
    tex.push_str("\\end{center}\n\n");
    tex.push_str("\\vspace{10pt}\n\n");

    // Date stamp: pass-through to the engine's own date macro.
    tex.push_str("\\today\n\n");
    tex.push_str("\\vspace{12pt}\n\n");

    // Recipient block.
    let recipient = doc
        .hiring_manager
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_RECIPIENT);
    tex.push_str(&latex_escape(recipient));
    tex.push_str("\\\\\n");
    if !doc.company_name.trim().is_empty() {
        tex.push_str(&latex_escape(doc.company_name.trim()));
        tex.push_str("\\\\\n");
    }
    tex.push('\n');

    if !doc.job_title.trim().is_empty() {
        tex.push_str(&format!(
            "\\textbf{{Re: {} position}}\n\n",
            latex_escape(doc.job_title.trim())
        ));
    }

    tex.push_str(&format!("Dear {},\n\n", latex_escape(recipient)));

    let paragraphs: Vec<&str> = doc
        .paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    let last = paragraphs.len().saturating_sub(1);
    for (idx, paragraph) in paragraphs.iter().enumerate() {
        tex.push_str(&latex_escape(paragraph));
        tex.push_str("\n\n");
        if idx < last {
            tex.push_str("\\vspace{8pt}\n\n");
        }
    }

    // Closing block.
    tex.push_str(&format!("{SIGN_OFF}\\\\\n"));
    tex.push_str(&latex_escape(&doc.contact.name));
    tex.push('\n');

    tex.push_str("\n\\end{document}\n");
    tex
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
