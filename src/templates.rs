//! Script/style text templates.
//!
//! Every piece of generated text is rendered from an explicit, typed
//! template rather than spliced ad hoc at the call site, so the
//! substitution rules stay centrally testable. Templates produce raw
//! (uncompiled) text; the transform gateway does the rest.

use crate::utils;
use crate::ModuleMode;

// ---------------------------------------------------------------------------
// Name Token
// ---------------------------------------------------------------------------

/// The synthesized `$NAME` constant exposing a component's (optionally
/// namespaced) canonical name to its own script and style body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameToken(String);

impl NameToken {
    /// `<theme>__<identifier>` when a non-blank theme is present, else the
    /// identifier exactly, with no stray separators.
    pub fn new(theme: Option<&str>, identifier: &str) -> Self {
        let prefix = match theme {
            Some(theme) if !theme.trim().is_empty() => format!("{theme}__"),
            _ => String::new(),
        };
        Self(format!("{prefix}{identifier}"))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Script-side binding, prepended to a component's script body.
    pub fn script_binding(&self) -> String {
        format!("const $NAME = \"{}\";\n", self.0)
    }

    /// Style-side binding (variable syntax of the style language),
    /// prepended to a component's style body.
    pub fn style_binding(&self) -> String {
        format!("$NAME: \"{}\";\n", self.0)
    }
}

// ---------------------------------------------------------------------------
// Self-Executing Wrappers
// ---------------------------------------------------------------------------

/// Wrap a script body in an immediately-invoked function expression, with
/// any default-export marker rewritten to a plain `return`.
pub fn self_executing(body: &str) -> String {
    format!("(function() {{ {} }})();", utils::rewrite_export_default(body))
}

/// One component rendered as a referentially-transparent named binding,
/// independent of any module system:
/// `const <Identifier> = (function() { <token>; <body> })();`
#[derive(Debug)]
pub struct ComponentUnit<'a> {
    pub identifier: &'a str,
    pub token: &'a NameToken,
    pub body: &'a str,
}

impl ComponentUnit<'_> {
    pub fn render(&self) -> String {
        let body = format!("{}{}", self.token.script_binding(), self.body);
        format!("const {} = {}", self.identifier, self_executing(&body))
    }
}

// ---------------------------------------------------------------------------
// Plugin Unit
// ---------------------------------------------------------------------------

/// The whole plugin script rendered from its typed slots: concatenated
/// component units, the distinct export names, the install fragment, and
/// the module mode.
#[derive(Debug)]
pub struct PluginUnit<'a> {
    pub name: &'a str,
    /// Concatenated component script units, input order.
    pub scripts: &'a str,
    /// Comma-joined distinct component names, first-occurrence order.
    pub export_names: &'a str,
    /// Install fragment; its default-export marker is stripped here.
    pub install: &'a str,
    pub mode: ModuleMode,
}

impl PluginUnit<'_> {
    pub fn render(&self) -> String {
        let body = format!(
            "{} return {{ {} }}",
            utils::ensure_statement_end(self.scripts),
            self.export_names
        );
        let binding = if self.mode.is_esm() { "const" } else { "var" };
        let bound = format!("{binding} {} = {}", self.name, self_executing(&body));

        let mut script = utils::ensure_statement_end(&bound);
        script.push_str(&format!(
            "{}.install = {};",
            self.name,
            utils::strip_export_default(self.install)
        ));
        if self.mode.is_esm() {
            script.push_str(&format!("export default {};", self.name));
        }
        script
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_token_with_theme() {
        let token = NameToken::new(Some("demo"), "CustomDiv");
        assert_eq!(token.value(), "demo__CustomDiv");
        assert_eq!(
            token.script_binding(),
            "const $NAME = \"demo__CustomDiv\";\n"
        );
        assert_eq!(token.style_binding(), "$NAME: \"demo__CustomDiv\";\n");
    }

    #[test]
    fn test_name_token_without_theme() {
        assert_eq!(NameToken::new(None, "Button").value(), "Button");
        assert_eq!(NameToken::new(Some(""), "Button").value(), "Button");
        assert_eq!(NameToken::new(Some("  "), "Button").value(), "Button");
    }

    #[test]
    fn test_self_executing_rewrites_export() {
        let unit = self_executing("export default function() { return 1; }");
        assert_eq!(unit, "(function() { return function() { return 1; } })();");
    }

    #[test]
    fn test_component_unit_shape() {
        let token = NameToken::new(Some("demo"), "Button");
        let unit = ComponentUnit {
            identifier: "Button",
            token: &token,
            body: "export default function() { return 1; }",
        };
        let rendered = unit.render();
        assert!(rendered.starts_with("const Button = (function() {"));
        assert!(rendered.contains("const $NAME = \"demo__Button\";"));
        assert!(rendered.contains("return function() { return 1; }"));
        assert!(rendered.ends_with("})();"));
    }

    #[test]
    fn test_plugin_unit_global_mode() {
        let unit = PluginUnit {
            name: "demo",
            scripts: "const A = 1;\nconst B = 2;",
            export_names: "A, B",
            install: "export default function install(self, option) { return {}; }",
            mode: ModuleMode::Global,
        };
        let rendered = unit.render();
        assert!(rendered.starts_with("var demo = (function() {"));
        assert!(rendered.contains("return { A, B }"));
        assert!(rendered.contains("demo.install = function install(self, option) { return {}; };"));
        assert!(!rendered.contains("export default"));
    }

    #[test]
    fn test_plugin_unit_esm_mode() {
        let unit = PluginUnit {
            name: "demo",
            scripts: "const A = 1;",
            export_names: "A",
            install: "",
            mode: ModuleMode::Esm,
        };
        let rendered = unit.render();
        assert!(rendered.starts_with("const demo = (function() {"));
        assert!(rendered.contains("demo.install = null;"));
        assert!(rendered.ends_with("export default demo;"));
    }

    #[test]
    fn test_plugin_unit_empty_components() {
        let unit = PluginUnit {
            name: "empty",
            scripts: "",
            export_names: "",
            install: "",
            mode: ModuleMode::Global,
        };
        let rendered = unit.render();
        assert!(rendered.starts_with("var empty = (function() {"));
        assert!(rendered.contains("return {  }"));
        assert!(rendered.contains("empty.install = null;"));
    }
}
