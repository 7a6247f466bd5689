//! Résumé rendering: one renderer, parameterized by layout profile.
//!
//! The renderer is total: it performs presence checks per section but no
//! semantic validation (that is the caller's job, see `validation`). A
//! section whose backing data is empty after trimming leaves no trace in
//! the output, not even an empty header or list environment.

use tracing::debug;

use crate::escape::latex_escape;
use crate::models::{EducationEntry, ExperienceEntry, ResumeDocument};
use crate::render::layout::{layout_profile, LayoutProfile, Section};
use crate::render::preamble::{build_preamble, PreambleKind};

/// Renders a résumé document to complete XeLaTeX source.
pub fn render_resume(doc: &ResumeDocument) -> String {
    let profile = layout_profile(doc.style);
    debug!(style = ?doc.style, language = ?doc.language, "rendering resume");

    let mut tex = build_preamble(doc.language, PreambleKind::Resume);
    push_header(&mut tex, doc, profile);

    for section in &profile.section_order {
        match section {
            Section::Summary => push_summary(&mut tex, doc, profile),
            Section::Education => push_education(&mut tex, doc, profile),
            Section::Experience => push_experience(&mut tex, doc, profile),
            Section::Skills => push_skills(&mut tex, doc, profile),
            Section::Projects => {
                push_item_list(&mut tex, profile.titles.projects, &doc.projects, profile)
            }
            Section::Certifications => push_item_list(
                &mut tex,
                profile.titles.certifications,
                &doc.certifications,
                profile,
            ),
            Section::Languages => push_languages(&mut tex, doc, profile),
        }
    }

    tex.push_str("\\end{document}\n");
    tex
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn push_header(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    let name = if profile.uppercase_name {
        latex_escape(&doc.contact.name.to_uppercase())
    } else {
        latex_escape(&doc.contact.name)
    };

    // Fixed part order: location, email, phone, then links. Blank parts
    // are skipped entirely so the separator never dangles.
    let mut parts: Vec<String> = Vec::new();
    for field in [
        &doc.contact.location,
        &doc.contact.email,
        &doc.contact.phone,
    ] {
        if !field.trim().is_empty() {
            parts.push(latex_escape(field.trim()));
        }
    }
    for link in &doc.contact.links {
        if !link.trim().is_empty() {
            parts.push(latex_escape(link.trim()));
        }
    }
    let contact_line = parts.join(profile.separator);

    if profile.centered_header {
        tex.push_str("\\begin{center}\n");
        tex.push_str(&format!("{{\\LARGE \\textbf{{{name}}}}}\n"));
        tex.push_str("\\end{center}\n\n");
        if !contact_line.is_empty() {
            tex.push_str("\\begin{center}\n");
            tex.push_str(&contact_line);
            tex.push_str("\n\\end{center}\n\n");
        }
    } else {
        tex.push_str(&format!("{{\\LARGE \\textbf{{{name}}}}}\n\n"));
        tex.push_str("\\vspace{2pt}\n");
        tex.push_str(profile.rule);
        tex.push_str("\n\\vspace{8pt}\n\n");
        if !contact_line.is_empty() {
            tex.push_str(&contact_line);
            tex.push_str("\n\n");
        }
    }
    tex.push_str(&format!("\\vspace{{{}pt}}\n\n", profile.header_gap_pt));
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn push_section_title(tex: &mut String, title: &str, profile: &LayoutProfile) {
    tex.push_str(&format!("\\section*{{{title}}}\n"));
    tex.push_str("\\vspace{-6pt}\n");
    tex.push_str(profile.rule);
    tex.push_str(&format!("\n\\vspace{{{}pt}}\n", profile.rule_gap_pt));
}

fn push_summary(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    if doc.summary.trim().is_empty() {
        return;
    }
    push_section_title(tex, profile.titles.summary, profile);
    tex.push_str(&latex_escape(doc.summary.trim()));
    tex.push_str("\n\n");
}

fn push_experience(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    if doc.experience.is_empty() {
        return;
    }
    push_section_title(tex, profile.titles.experience, profile);
    tex.push('\n');

    let last = doc.experience.len() - 1;
    for (idx, entry) in doc.experience.iter().enumerate() {
        push_experience_entry(tex, entry, profile);
        if idx < last {
            tex.push_str(&format!("\\vspace{{{}pt}}\n\n", profile.experience_gap_pt));
        }
    }
    tex.push('\n');
}

fn push_experience_entry(tex: &mut String, entry: &ExperienceEntry, profile: &LayoutProfile) {
    tex.push_str(&format!(
        "\\textbf{{{}}}{}{}\\\\\n",
        latex_escape(&entry.title),
        profile.title_joiner,
        latex_escape(&entry.company)
    ));
    tex.push_str(&format!(
        "{{\\itshape {}{}{} -- {}}}\n\n",
        latex_escape(&entry.location),
        profile.separator,
        latex_escape(&entry.start),
        latex_escape(&entry.end)
    ));

    // Whitespace-only bullets are dropped, and the list environment is
    // omitted entirely when nothing survives: an itemize with zero items
    // does not compile.
    let bullets: Vec<&str> = entry
        .bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if !bullets.is_empty() {
        tex.push_str("\\begin{itemize}\n");
        for bullet in bullets {
            tex.push_str(&format!("  \\item {}\n", latex_escape(bullet)));
        }
        tex.push_str("\\end{itemize}\n");
    }
}

fn push_education(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    if doc.education.is_empty() {
        return;
    }
    push_section_title(tex, profile.titles.education, profile);
    tex.push('\n');

    let last = doc.education.len() - 1;
    for (idx, entry) in doc.education.iter().enumerate() {
        push_education_entry(tex, entry, profile);
        if idx < last {
            tex.push_str(&format!("\\vspace{{{}pt}}\n\n", profile.education_gap_pt));
        }
    }
    tex.push('\n');
}

fn push_education_entry(tex: &mut String, entry: &EducationEntry, profile: &LayoutProfile) {
    tex.push_str(&format!("\\textbf{{{}}}\\\\\n", latex_escape(&entry.school)));
    tex.push_str(&format!(
        "{{\\itshape {}}}{}{}",
        latex_escape(&entry.degree),
        profile.date_separator,
        latex_escape(&entry.dates)
    ));
    if let Some(location) = trimmed(&entry.location) {
        tex.push_str(profile.date_separator);
        tex.push_str(&latex_escape(location));
    }
    tex.push('\n');

    // modules and achievements each get their own bullet; extra renders
    // only when neither is present.
    let mut items: Vec<&str> = Vec::new();
    if let Some(modules) = trimmed(&entry.modules) {
        items.push(modules);
    }
    if let Some(achievements) = trimmed(&entry.achievements) {
        items.push(achievements);
    }
    if items.is_empty() {
        if let Some(extra) = trimmed(&entry.extra) {
            items.push(extra);
        }
    }
    if !items.is_empty() {
        tex.push_str("\\begin{itemize}\n");
        for item in items {
            tex.push_str(&format!("  \\item {}\n", latex_escape(item)));
        }
        tex.push_str("\\end{itemize}\n");
    }
}

fn push_skills(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    let hard = retained(&doc.skills.hard);
    let tools = retained(&doc.skills.tools);
    let soft = retained(&doc.skills.soft);
    if hard.is_empty() && tools.is_empty() && soft.is_empty() {
        return;
    }
    push_section_title(tex, profile.titles.skills, profile);
    tex.push('\n');

    let labels = &profile.skill_labels;
    for (label, list) in [(labels.hard, &hard), (labels.tools, &tools), (labels.soft, &soft)] {
        if list.is_empty() {
            continue;
        }
        let joined = list
            .iter()
            .map(|s| latex_escape(s))
            .collect::<Vec<_>>()
            .join(", ");
        tex.push_str(&format!("\\textbf{{{label}:}} {joined}\\\\\n"));
    }
    tex.push('\n');
}

fn push_item_list(tex: &mut String, title: &str, entries: &[String], profile: &LayoutProfile) {
    let items = retained(entries);
    if items.is_empty() {
        return;
    }
    push_section_title(tex, title, profile);
    tex.push('\n');
    tex.push_str("\\begin{itemize}\n");
    for item in items {
        tex.push_str(&format!("  \\item {}\n", latex_escape(item)));
    }
    tex.push_str("\\end{itemize}\n\n");
}

fn push_languages(tex: &mut String, doc: &ResumeDocument, profile: &LayoutProfile) {
    let items = retained(&doc.languages_extra);
    if items.is_empty() {
        return;
    }
    push_section_title(tex, profile.titles.languages, profile);
    tex.push('\n');
    let joined = items
        .iter()
        .map(|s| latex_escape(s))
        .collect::<Vec<_>>()
        .join(profile.separator);
    tex.push_str(&joined);
    tex.push_str("\n\n");
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn retained(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
