//! Type-declaration surface generation.
//!
//! Textually reshapes raw prop-type fragments into declaration lines and
//! wraps the collected lines into one plugin-level declaration block. This
//! is not a type-checker; the prop text is trusted as written.

use regex::Regex;

use crate::utils;
use crate::ModuleMode;

// ---------------------------------------------------------------------------
// Prop-Type Parsing
// ---------------------------------------------------------------------------

/// Strip comments and the export/alias markers from a raw prop-type
/// fragment, leaving only the type body. Blank input degrades to the
/// permissive `any` contract; this function never errors.
pub fn parse_props_type(props: &str) -> String {
    let line_comments = Regex::new(r"(?m)//.*$").unwrap();
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();

    let content = line_comments.replace_all(props, "");
    let content = block_comments.replace_all(&content, "");

    let body = content
        .replacen("export default Props;", "", 1)
        .replacen("type Props =", "", 1)
        .trim()
        .to_string();

    if body.is_empty() {
        "any".to_string()
    } else {
        body
    }
}

// ---------------------------------------------------------------------------
// Declaration Rendering
// ---------------------------------------------------------------------------

/// Render one component's declaration line: trimmed docs block, then the
/// identifier bound to its parsed prop type, with an `export const`
/// qualifier in module mode.
pub fn component_declaration(
    name: &str,
    props: Option<&str>,
    docs: Option<&str>,
    mode: ModuleMode,
) -> String {
    let docs = docs.map(str::trim).unwrap_or("");
    let qualifier = if mode.is_esm() { "export const " } else { "" };
    let props_text = parse_props_type(&utils::resolve_or_default(props, ""));

    format!("{docs}\n{qualifier}{name}: {props_text}")
        .trim()
        .to_string()
}

/// Wrap the collected declaration lines into the plugin-level block.
pub fn plugin_declarations(name: &str, content: &str, mode: ModuleMode) -> String {
    if mode.is_esm() {
        format!("declare module {name} {{\n{content}\n}}")
    } else {
        format!("declare const {name}: {{\n{content}\n}}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PROPS: &str = r#"
    type Props = {
      class?: string | string[] | object;
      children?: any; // slot content
    };

    export default Props;
    "#;

    #[test]
    fn test_parse_props_type_strips_markers() {
        let parsed = parse_props_type(PROPS);
        assert!(parsed.starts_with('{'));
        assert!(parsed.ends_with("};"));
        assert!(!parsed.contains("type Props"));
        assert!(!parsed.contains("export default"));
    }

    #[test]
    fn test_parse_props_type_strips_comments() {
        let parsed = parse_props_type("type Props = {\n  // inline note\n  /* block\n note */\n  x?: number;\n};\nexport default Props;");
        assert!(!parsed.contains("inline note"));
        assert!(!parsed.contains("block"));
        assert!(parsed.contains("x?: number;"));
    }

    #[test]
    fn test_parse_props_type_empty_is_any() {
        assert_eq!(parse_props_type(""), "any");
        assert_eq!(parse_props_type("   \n  "), "any");
    }

    #[test]
    fn test_component_declaration() {
        let line = component_declaration(
            "CustomDiv",
            Some(PROPS),
            Some("\n/**\n * CustomDiv docs.\n */\n"),
            ModuleMode::Global,
        );
        assert!(line.starts_with("/**"));
        assert!(line.contains("CustomDiv: {"));
        assert!(!line.contains("export const"));
    }

    #[test]
    fn test_component_declaration_esm_qualifier() {
        let line = component_declaration("Button", Some(PROPS), None, ModuleMode::Esm);
        assert!(line.starts_with("export const Button: {"));
    }

    #[test]
    fn test_component_declaration_missing_props_is_any() {
        let line = component_declaration("Button", None, None, ModuleMode::Global);
        assert_eq!(line, "Button: any");
    }

    #[test]
    fn test_plugin_declarations_shapes() {
        let global = plugin_declarations("demo", "Button: any", ModuleMode::Global);
        assert_eq!(global, "declare const demo: {\nButton: any\n}");

        let esm = plugin_declarations("demo", "Button: any", ModuleMode::Esm);
        assert_eq!(esm, "declare module demo {\nButton: any\n}");
    }
}
