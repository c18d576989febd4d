//! # Lattice Bundler
//!
//! Deterministic assembler that folds independently authored component
//! fragments (script, style, prop-type text, docs) into one named,
//! self-executing plugin bundle: a script artifact, a style artifact, and a
//! type-declaration block.
//!
//! The bundler reshapes and concatenates text only: it never resolves
//! imports across components and never interprets component semantics.
//! Script and style compilation are delegated to the [`TransformGateway`]
//! collaborators.

pub mod assemble;
pub mod declarations;
pub mod install;
pub mod plugin;
pub mod templates;
pub mod transform;
pub mod utils;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use install::InstallOptions;
pub use transform::{NativeGateway, TransformGateway};

// ---------------------------------------------------------------------------
// Module Mode
// ---------------------------------------------------------------------------

/// Whether produced artifacts use import/export syntax or a plain
/// global-binding style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleMode {
    /// Plain global bindings: `var <name> = …`, `declare const <name>: …`.
    Global,
    /// ES module output: `const <name> = …` plus a trailing default export,
    /// `declare module <name> { … }`.
    Esm,
}

impl ModuleMode {
    pub fn is_esm(self) -> bool {
        matches!(self, ModuleMode::Esm)
    }
}

// ---------------------------------------------------------------------------
// Component Descriptor (caller input)
// ---------------------------------------------------------------------------

/// One caller-supplied component fragment. Every field is optional; absent
/// fields degrade to defined fallbacks, never to an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDescriptor {
    /// Hyphenated human name, e.g. `custom-div`. May be empty.
    pub name: Option<String>,
    /// Raw script text; a single default-exported function is expected.
    pub code: Option<String>,
    /// Raw style text.
    pub style: Option<String>,
    /// Raw prop-type text; a single default-exported type is expected.
    pub props: Option<String>,
    /// Free-text documentation block.
    pub docs: Option<String>,
    /// Optional namespace. The plugin aggregator overwrites this with the
    /// plugin name; callers set it only for standalone component builds.
    pub theme: Option<String>,
}

// ---------------------------------------------------------------------------
// Assembled Component
// ---------------------------------------------------------------------------

/// The sealed output of a single component assembly. Created once per
/// descriptor and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledComponent {
    /// Canonical identifier, e.g. `CustomDiv`. Unique only by caller
    /// discipline: the aggregator de-duplicates silently (see
    /// [`plugin::aggregate_plugin`]).
    pub name: String,
    /// Resolved raw script text as received.
    pub raw_script: String,
    /// Resolved raw style text as received.
    pub raw_style: String,
    /// Resolved raw prop-type text, unprocessed until declaration time.
    pub props: String,
    /// Resolved documentation block.
    pub docs: String,
    /// Ready-to-concatenate self-executing script unit.
    pub compiled_script: String,
    /// Namespaced, compiled style unit.
    pub compiled_style: String,
    /// One line of the type-declaration surface.
    pub declaration: String,
}

// ---------------------------------------------------------------------------
// Diagnostic
// ---------------------------------------------------------------------------

/// A structured diagnostic emitted during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

// ---------------------------------------------------------------------------
// Plugin Artifact
// ---------------------------------------------------------------------------

/// The sealed output of a plugin build. Callers consume this as-is: no
/// post-concat or mutation, and no state survives between builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginArtifact {
    /// One minified, self-executing script exporting an object keyed by
    /// every distinct component name, with `.install` attached.
    pub script: String,
    /// One compiled style sheet: all non-empty component style units in
    /// input order.
    pub style: String,
    /// One declaration block wrapping every component's declaration line.
    pub declarations: String,
    /// Diagnostics collected during aggregation.
    pub diagnostics: Vec<Diagnostic>,
}

// ---------------------------------------------------------------------------
// Bundle Error
// ---------------------------------------------------------------------------

/// Errors that abort a build. Only collaborator failures surface here;
/// malformed textual input always degrades to a safe default instead.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Script transform error: {0}")]
    ScriptTransform(String),

    #[error("Style transform error: {0}")]
    StyleTransform(String),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assemble a single component fragment into a sealed [`AssembledComponent`].
///
/// The script and style compiles run concurrently through the gateway; a
/// rejection from either collaborator propagates unmodified and no partial
/// result is returned.
pub async fn build_component<G: TransformGateway>(
    gateway: &G,
    descriptor: &ComponentDescriptor,
    mode: ModuleMode,
) -> Result<AssembledComponent, BundleError> {
    assemble::assemble_component(gateway, descriptor, mode).await
}

/// Build a named plugin bundle from an ordered list of component
/// descriptors plus install options.
///
/// **There is only one assembly codepath.** Every descriptor runs through
/// [`assemble::assemble_component`] with the plugin name as its namespace,
/// fanned out concurrently; results are folded in input order by
/// [`plugin::aggregate_plugin`]. A single failed assembly fails the whole
/// build: all or nothing, no retries.
pub async fn build_plugin<G: TransformGateway>(
    gateway: &G,
    plugin_name: &str,
    descriptors: &[ComponentDescriptor],
    install: &InstallOptions,
    mode: ModuleMode,
) -> Result<PluginArtifact, BundleError> {
    plugin::build_plugin(gateway, plugin_name, descriptors, install, mode).await
}
