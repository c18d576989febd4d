//! Install-hook synthesis.
//!
//! Turns a loosely-shaped options object into a canonical installer script
//! fragment. The installer shape is always complete: every recognized field
//! is emitted, with absent options bound to an explicit `null` rather than
//! omitted, so downstream consumers never need presence checks.

use serde::{Deserialize, Serialize};

use crate::templates;
use crate::utils;

// ---------------------------------------------------------------------------
// Install Options
// ---------------------------------------------------------------------------

/// Recognized install-hook options. Each field is an optional raw script
/// expression, commonly itself a default-exported function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallOptions {
    pub init: Option<String>,
    pub store: Option<String>,
    pub globals: Option<String>,
    pub directives: Option<String>,
    pub actions: Option<String>,
    pub models: Option<String>,
    pub router: Option<String>,
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Synthesize the canonical installer fragment. Pure text, synchronous,
/// total over all inputs.
pub fn synthesize_install(options: &InstallOptions) -> String {
    format!(
        "export default function install(self, option) {{\n    \
         return {{\n        \
         init: {},\n        \
         store: {},\n        \
         globals: {},\n        \
         directives: {},\n        \
         actions: {},\n        \
         models: {},\n        \
         router: {},\n    \
         }};\n}}",
        install_value(options.init.as_deref()),
        install_value(options.store.as_deref()),
        install_value(options.globals.as_deref()),
        install_value(options.directives.as_deref()),
        install_value(options.actions.as_deref()),
        install_value(options.models.as_deref()),
        install_value(options.router.as_deref()),
    )
}

/// One field's value: the raw expression wrapped as a self-executing
/// function (trailing semicolon removed for expression position), or the
/// literal `null` when blank.
fn install_value(expression: Option<&str>) -> String {
    let raw = utils::resolve_or_default(expression, "");
    if raw.is_empty() {
        "null".to_string()
    } else {
        utils::remove_semicolon(&templates::self_executing(&raw))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
