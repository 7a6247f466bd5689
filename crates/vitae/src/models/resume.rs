//! Résumé document records.

use serde::{Deserialize, Serialize};

/// Document language. Three input codes collapse onto two typesetting
/// configurations; see `render::preamble::language_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    Ru,
    Uz,
}

impl Language {
    /// The wire/display code, as used in filenames and the JSON format.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
            Language::Uz => "UZ",
        }
    }
}

/// Layout variant selector. `Harvard` is the classic single-column layout
/// with centered headers; `Pro` is the left-aligned modern layout with
/// thinner rules and tighter spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CvStyle {
    Harvard,
    Pro,
}

impl CvStyle {
    pub fn code(&self) -> &'static str {
        match self {
            CvStyle::Harvard => "HARVARD",
            CvStyle::Pro => "PRO",
        }
    }
}

/// Contact block for both document kinds.
///
/// `name` is expected to be non-blank for a meaningful render; the
/// renderers do not enforce this (see `validation`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    /// Profile/portfolio URLs, rendered in the order supplied.
    #[serde(default)]
    pub links: Vec<String>,
}

/// One work-experience position. `start`/`end` are free-text date tokens
/// ("Mar 2021", "Present"), never parsed or validated as dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One education entry. `modules` and `achievements` each render as their
/// own sub-bullet when present; `extra` is a fallback that renders only
/// when neither of the other two is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub modules: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

/// Three independent skill lists, each rendered as a labeled comma-joined
/// line only when non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub hard: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// The full résumé record handed to `render::render_resume`.
///
/// List order is significant everywhere: the renderer never reorders and
/// never deduplicates. `languages_extra` holds spoken-language strings such
/// as "English (C1)".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub languages_extra: Vec<String>,
    pub language: Language,
    pub style: CvStyle,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
