//! Static layout profiles for the two résumé variants.
//!
//! The variants share all control flow; everything that actually differs
//! (titles, separators, rule weight, spacing, section order) lives in a
//! static `LayoutProfile` so the renderer is written exactly once.
//! Title strings are emitted as raw markup, so any specials they carry
//! (`\&`) are stored pre-escaped.

use crate::models::CvStyle;

/// A named résumé section. Both variants emit all seven; only the relative
/// order of Education and Experience differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Languages,
}

/// Per-variant section title strings. Fixed lookup, not configurable.
#[derive(Debug)]
pub struct SectionTitles {
    pub summary: &'static str,
    pub education: &'static str,
    pub experience: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub certifications: &'static str,
    pub languages: &'static str,
}

/// Per-variant labels for the three skill lines.
#[derive(Debug)]
pub struct SkillLabels {
    pub hard: &'static str,
    pub tools: &'static str,
    pub soft: &'static str,
}

/// Everything a layout variant fixes about the rendered page.
#[derive(Debug)]
pub struct LayoutProfile {
    pub style: CvStyle,
    pub titles: SectionTitles,
    pub skill_labels: SkillLabels,
    /// Glyph joining contact parts and spoken-language entries.
    pub separator: &'static str,
    /// Joiner between a role title and its company.
    pub title_joiner: &'static str,
    /// Joiner between a degree and its dates (and optional location).
    pub date_separator: &'static str,
    /// Horizontal rule drawn under the header and each section title.
    pub rule: &'static str,
    /// Centered header block vs left-aligned with a rule underneath.
    pub centered_header: bool,
    pub uppercase_name: bool,
    /// Section emission order for this variant.
    pub section_order: [Section; 7],
    /// Vertical space after the contact block.
    pub header_gap_pt: u8,
    /// Vertical space between a section rule and the section body.
    pub rule_gap_pt: u8,
    /// Vertical space between experience entries (not after the last).
    pub experience_gap_pt: u8,
    /// Vertical space between education entries (not after the last).
    pub education_gap_pt: u8,
}

/// Classic single-column layout: centered header, default-weight rules,
/// Education ahead of Experience.
static HARVARD_PROFILE: LayoutProfile = LayoutProfile {
    style: CvStyle::Harvard,
    titles: SectionTitles {
        summary: "Professional Summary",
        education: "Education",
        experience: "Professional Experience",
        skills: "Skills",
        projects: "Projects \\& Activities",
        certifications: "Certifications",
        languages: "Languages",
    },
    skill_labels: SkillLabels {
        hard: "Technical Skills",
        tools: "Tools \\& Technologies",
        soft: "Soft Skills",
    },
    separator: " $\\bullet$ ",
    title_joiner: " $|$ ",
    date_separator: " $\\bullet$ ",
    rule: "\\hrule",
    centered_header: true,
    uppercase_name: false,
    section_order: [
        Section::Summary,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Languages,
    ],
    header_gap_pt: 10,
    rule_gap_pt: 6,
    experience_gap_pt: 8,
    education_gap_pt: 6,
};

/// Modern layout: left-aligned uppercased header, thin rules, tighter
/// vertical rhythm, Experience ahead of Education.
static PRO_PROFILE: LayoutProfile = LayoutProfile {
    style: CvStyle::Pro,
    titles: SectionTitles {
        summary: "PROFESSIONAL SUMMARY",
        education: "EDUCATION",
        experience: "PROFESSIONAL EXPERIENCE",
        skills: "SKILLS",
        projects: "PROJECTS",
        certifications: "CERTIFICATIONS",
        languages: "LANGUAGES",
    },
    skill_labels: SkillLabels {
        hard: "Programming",
        tools: "Tools \\& Technologies",
        soft: "Core Competencies",
    },
    separator: " $|$ ",
    title_joiner: " -- ",
    date_separator: " -- ",
    rule: "\\hrule height 0.3pt",
    centered_header: false,
    uppercase_name: true,
    section_order: [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Languages,
    ],
    header_gap_pt: 10,
    rule_gap_pt: 4,
    experience_gap_pt: 6,
    education_gap_pt: 4,
};

/// Returns the static profile for a layout variant.
pub fn layout_profile(style: CvStyle) -> &'static LayoutProfile {
    match style {
        CvStyle::Harvard => &HARVARD_PROFILE,
        CvStyle::Pro => &PRO_PROFILE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Section; 7], section: Section) -> usize {
        order.iter().position(|s| *s == section).unwrap()
    }

    #[test]
    fn test_profiles_match_their_style() {
        assert_eq!(layout_profile(CvStyle::Harvard).style, CvStyle::Harvard);
        assert_eq!(layout_profile(CvStyle::Pro).style, CvStyle::Pro);
    }

    #[test]
    fn test_harvard_places_education_before_experience() {
        let order = &layout_profile(CvStyle::Harvard).section_order;
        assert!(position(order, Section::Education) < position(order, Section::Experience));
    }

    #[test]
    fn test_pro_places_experience_before_education() {
        let order = &layout_profile(CvStyle::Pro).section_order;
        assert!(position(order, Section::Experience) < position(order, Section::Education));
    }

    #[test]
    fn test_both_orders_cover_all_sections_once() {
        for style in [CvStyle::Harvard, CvStyle::Pro] {
            let order = &layout_profile(style).section_order;
            for section in [
                Section::Summary,
                Section::Education,
                Section::Experience,
                Section::Skills,
                Section::Projects,
                Section::Certifications,
                Section::Languages,
            ] {
                assert_eq!(
                    order.iter().filter(|s| **s == section).count(),
                    1,
                    "{section:?} must appear exactly once in {style:?}"
                );
            }
        }
    }

    #[test]
    fn test_pro_rule_is_thinner_and_spacing_tighter() {
        let harvard = layout_profile(CvStyle::Harvard);
        let pro = layout_profile(CvStyle::Pro);
        assert!(pro.rule.contains("0.3pt"));
        assert!(!harvard.rule.contains("height"));
        assert!(pro.rule_gap_pt < harvard.rule_gap_pt);
        assert!(pro.experience_gap_pt < harvard.experience_gap_pt);
        assert!(pro.education_gap_pt < harvard.education_gap_pt);
    }

    #[test]
    fn test_only_pro_uppercases_the_name() {
        assert!(!layout_profile(CvStyle::Harvard).uppercase_name);
        assert!(layout_profile(CvStyle::Pro).uppercase_name);
    }

    #[test]
    fn test_title_strings_carry_preescaped_specials() {
        // Titles go into the output as raw markup; a bare '&' would break
        // compilation.
        let harvard = layout_profile(CvStyle::Harvard);
        assert_eq!(harvard.titles.projects, "Projects \\& Activities");
        assert_eq!(harvard.skill_labels.tools, "Tools \\& Technologies");
    }
}
