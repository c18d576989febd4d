//! Utility functions for the assembler.
//!
//! - Identifier normalization (hyphenated name to PascalCase)
//! - Total fallback resolution for optional text fields
//! - Script text hygiene (export markers, statement termination)

// ---------------------------------------------------------------------------
// Identifier Normalization
// ---------------------------------------------------------------------------

/// Convert a hyphenated human name into a canonical PascalCase identifier.
///
/// `custom-div` becomes `CustomDiv`. Empty input yields an empty identifier;
/// invalid characters pass through untouched. This is a textual transform
/// only and never errors.
pub fn pascal_identifier(hyphenated: &str) -> String {
    let identifier: String = hyphenated.split('-').map(capitalize_first).collect();
    // Defensive: drop a leftover separator if one somehow survived.
    identifier.replacen('-', "", 1)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Optional-Field Resolution
// ---------------------------------------------------------------------------

/// Total fallback resolution, used uniformly at every optional-field
/// boundary: blank or absent text resolves to `default`, anything else
/// passes through unchanged.
pub fn resolve_or_default(text: Option<&str>, default: &str) -> String {
    match text {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Script Text Hygiene
// ---------------------------------------------------------------------------

/// Rewrite every default-export marker to a plain `return`, so the text can
/// live inside a self-executing function body.
pub fn rewrite_export_default(code: &str) -> String {
    code.replace("export default", "return")
}

/// Strip the leading default-export marker from an expression fragment.
/// Blank input resolves to the literal `null`.
pub fn strip_export_default(code: &str) -> String {
    if code.trim().is_empty() {
        "null".to_string()
    } else {
        code.replacen("export default", "", 1).trim().to_string()
    }
}

/// Append a terminating semicolon unless the text already ends with one.
/// Keeps concatenated script units from merging into a single statement.
pub fn ensure_statement_end(code: &str) -> String {
    if code.trim().ends_with(';') {
        code.to_string()
    } else {
        format!("{code};")
    }
}

/// Trim the text and drop one trailing semicolon, for expression position.
pub fn remove_semicolon(value: &str) -> String {
    let trimmed = value.trim();
    trimmed.strip_suffix(';').unwrap_or(trimmed).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_identifier() {
        assert_eq!(pascal_identifier("custom-div"), "CustomDiv");
        assert_eq!(pascal_identifier("button"), "Button");
        assert_eq!(pascal_identifier("x-y-z"), "XYZ");
    }

    #[test]
    fn test_pascal_identifier_empty() {
        assert_eq!(pascal_identifier(""), "");
    }

    #[test]
    fn test_pascal_identifier_no_separator_survives() {
        assert!(!pascal_identifier("a-b-c-d").contains('-'));
        assert!(!pascal_identifier("trailing-").contains('-'));
    }

    #[test]
    fn test_resolve_or_default() {
        assert_eq!(resolve_or_default(Some("value"), "fallback"), "value");
        assert_eq!(resolve_or_default(Some("   "), "fallback"), "fallback");
        assert_eq!(resolve_or_default(None, "fallback"), "fallback");
    }

    #[test]
    fn test_rewrite_export_default() {
        assert_eq!(
            rewrite_export_default("export default function() {}"),
            "return function() {}"
        );
        // Every occurrence is rewritten, not just the first.
        assert_eq!(
            rewrite_export_default("export default a; export default b;"),
            "return a; return b;"
        );
    }

    #[test]
    fn test_strip_export_default() {
        assert_eq!(
            strip_export_default("export default function install() {}"),
            "function install() {}"
        );
        assert_eq!(strip_export_default(""), "null");
        assert_eq!(strip_export_default("   "), "null");
    }

    #[test]
    fn test_ensure_statement_end() {
        assert_eq!(ensure_statement_end("var x = 1"), "var x = 1;");
        assert_eq!(ensure_statement_end("var x = 1;"), "var x = 1;");
        assert_eq!(ensure_statement_end("var x = 1; "), "var x = 1; ");
    }

    #[test]
    fn test_remove_semicolon() {
        assert_eq!(remove_semicolon("(function() {})();"), "(function() {})()");
        assert_eq!(remove_semicolon("  value  "), "value");
        assert_eq!(remove_semicolon("no-semi"), "no-semi");
    }
}
