//! XeLaTeX preamble construction and per-language typesetting configuration.

use crate::models::Language;

// ────────────────────────────────────────────────────────────────────────────
// Language configuration
// ────────────────────────────────────────────────────────────────────────────

/// Typesetting configuration for one supported document language.
///
/// Three input codes collapse onto two polyglossia configurations: EN and
/// UZ share the Latin-script `english` hyphenation/typography rules, RU
/// uses `russian`. RU and UZ both need a Cyrillic-capable font family
/// registered in addition to the main font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    pub polyglossia: &'static str,
    pub needs_cyrillic_font: bool,
}

/// Lookup from language code to typesetting configuration.
pub fn language_config(lang: Language) -> LanguageConfig {
    match lang {
        Language::En => LanguageConfig {
            polyglossia: "english",
            needs_cyrillic_font: false,
        },
        Language::Ru => LanguageConfig {
            polyglossia: "russian",
            needs_cyrillic_font: true,
        },
        // Uzbek text arrives in Latin script, so English rules apply, but
        // names and quoted material routinely mix in Cyrillic.
        Language::Uz => LanguageConfig {
            polyglossia: "english",
            needs_cyrillic_font: true,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preamble
// ────────────────────────────────────────────────────────────────────────────

/// Which document kind the preamble serves. Cover letters carry no ruled
/// section titles, so their preamble skips the titlesec styling block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleKind {
    Resume,
    CoverLetter,
}

/// Builds the document preamble up to and including `\begin{document}`.
pub fn build_preamble(lang: Language, kind: PreambleKind) -> String {
    let config = language_config(lang);

    let mut tex = String::new();
    tex.push_str("% Compile with XeLaTeX (pdfLaTeX lacks fontspec/polyglossia support)\n");
    tex.push_str("\\documentclass[11pt]{article}\n");
    tex.push_str("\\usepackage[a4paper,margin=1in]{geometry}\n");
    tex.push_str("\\usepackage{fontspec}\n");
    tex.push_str("\\usepackage{polyglossia}\n");
    tex.push_str(&format!("\\setdefaultlanguage{{{}}}\n", config.polyglossia));
    tex.push('\n');
    tex.push_str("\\setmainfont{DejaVu Serif}\n");
    if config.needs_cyrillic_font {
        tex.push_str("\\newfontfamily\\cyrillicfont{DejaVu Serif}\n");
    }
    tex.push('\n');
    tex.push_str("\\usepackage{enumitem}\n");
    tex.push_str("\\setlist[itemize]{noitemsep,topsep=0pt,leftmargin=1.5em}\n");
    tex.push_str("\\usepackage{titlesec}\n");
    tex.push_str("\\usepackage{hyperref}\n");
    tex.push_str("\\hypersetup{\n");
    tex.push_str("  colorlinks=true,\n");
    tex.push_str("  linkcolor=black,\n");
    tex.push_str("  urlcolor=blue,\n");
    tex.push_str("  pdfauthor={CV},\n");
    tex.push_str("  pdftitle={CV}\n");
    tex.push_str("}\n");
    tex.push('\n');
    if kind == PreambleKind::Resume {
        tex.push_str("\\titleformat{\\section}{\\bfseries\\scshape\\large}{}{0pt}{}\n");
        tex.push_str("\\titlespacing*{\\section}{0pt}{12pt}{6pt}\n");
        tex.push('\n');
    }
    tex.push_str("\\pagestyle{empty}\n");
    tex.push_str("\\renewcommand\\labelitemi{--}\n");
    tex.push('\n');
    tex.push_str("\\begin{document}\n");
    tex
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
