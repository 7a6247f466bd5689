//! LaTeX escaping for user-supplied text.
//!
//! Every character with syntactic meaning in the emitted markup is replaced
//! by its literal-rendering command in a single left-to-right pass over the
//! input. The pass never revisits its own output, so the braces introduced
//! by `\textbackslash{}` (and friends) are never re-escaped, whatever order
//! the specials appear in.

/// Escapes LaTeX special characters in user-provided text.
///
/// The transformation is per-character and context-free: each of
/// `\ { } $ # % & _ ^ ~` maps to one fixed replacement, everything else is
/// copied through. Applying it to already-escaped text double-escapes;
/// callers must pass raw input exactly once.
pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            '&' => out.push_str("\\&"),
            '_' => out.push_str("\\_"),
            '^' => out.push_str("\\textasciicircum{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            _ => out.push(c),
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_backslashes() {
        assert_eq!(latex_escape("\\test"), "\\textbackslash{}test");
    }

    #[test]
    fn test_escapes_curly_braces() {
        assert_eq!(latex_escape("{test}"), "\\{test\\}");
    }

    #[test]
    fn test_escapes_dollar_signs() {
        assert_eq!(latex_escape("$100"), "\\$100");
    }

    #[test]
    fn test_escapes_hashes() {
        assert_eq!(latex_escape("#hashtag"), "\\#hashtag");
    }

    #[test]
    fn test_escapes_percent_signs() {
        assert_eq!(latex_escape("100%"), "100\\%");
    }

    #[test]
    fn test_escapes_ampersands() {
        assert_eq!(latex_escape("Smith & Jones"), "Smith \\& Jones");
    }

    #[test]
    fn test_escapes_underscores() {
        assert_eq!(latex_escape("file_name"), "file\\_name");
    }

    #[test]
    fn test_escapes_carets() {
        assert_eq!(latex_escape("x^2"), "x\\textasciicircum{}2");
    }

    #[test]
    fn test_escapes_tildes() {
        assert_eq!(latex_escape("~user"), "\\textasciitilde{}user");
    }

    #[test]
    fn test_multiple_special_characters_compose() {
        assert_eq!(
            latex_escape("$100 & 50% of {users} #1"),
            "\\$100 \\& 50\\% of \\{users\\} \\#1"
        );
    }

    #[test]
    fn test_empty_string_maps_to_empty_string() {
        assert_eq!(latex_escape(""), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(latex_escape("Hello World"), "Hello World");
    }

    #[test]
    fn test_company_names_with_ampersands() {
        assert_eq!(latex_escape("Johnson & Johnson"), "Johnson \\& Johnson");
        assert_eq!(latex_escape("AT&T"), "AT\\&T");
    }

    #[test]
    fn test_email_addresses() {
        assert_eq!(
            latex_escape("user_name@example.com"),
            "user\\_name@example.com"
        );
    }

    #[test]
    fn test_real_world_bullet_text() {
        let input = "Increased revenue by 25% & reduced costs (saving $10k)";
        let expected = "Increased revenue by 25\\% \\& reduced costs (saving \\$10k)";
        assert_eq!(latex_escape(input), expected);
    }

    #[test]
    fn test_backslash_braces_do_not_interact() {
        // The braces emitted for the backslash replacement must not be
        // re-escaped, and input braces next to a backslash stay independent.
        assert_eq!(latex_escape("\\{"), "\\textbackslash{}\\{");
        assert_eq!(latex_escape("{\\}"), "\\{\\textbackslash{}\\}");
    }

    #[test]
    fn test_non_ascii_text_passes_through() {
        assert_eq!(latex_escape("Résumé Москва 東京"), "Résumé Москва 東京");
    }

    #[test]
    fn test_output_has_no_unescaped_specials() {
        // Property from the contract: no bare special may survive. A bare
        // special is one not produced by the substitution table itself, so
        // strip the known replacements first and check what remains.
        let input = "a\\b{c}d$e#f%g&h_i^j~k";
        let escaped = latex_escape(input);
        let stripped = escaped
            .replace("\\textbackslash{}", "")
            .replace("\\textasciicircum{}", "")
            .replace("\\textasciitilde{}", "")
            .replace("\\{", "")
            .replace("\\}", "")
            .replace("\\$", "")
            .replace("\\#", "")
            .replace("\\%", "")
            .replace("\\&", "")
            .replace("\\_", "");
        for special in ['\\', '{', '}', '$', '#', '%', '&', '_', '^', '~'] {
            assert!(
                !stripped.contains(special),
                "unescaped '{special}' survived in {escaped:?}"
            );
        }
    }
}
