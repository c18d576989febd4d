//! Plugin aggregation.
//!
//! This module orchestrates the full plugin pipeline:
//! 1. Fan every descriptor out through component assembly (concurrent,
//!    unordered completion)
//! 2. Collect results in original input order
//! 3. Synthesize the install fragment
//! 4. Fold everything into the sealed three-part [`PluginArtifact`]
//!
//! **Single aggregation path.** Input order is preserved in every
//! concatenated output; only the export-name collection de-duplicates, and
//! it does so with a value-local set constructed fresh per call. No state
//! survives between builds.

use futures::future;
use hashlink::LinkedHashSet;

use crate::install::{synthesize_install, InstallOptions};
use crate::templates::PluginUnit;
use crate::transform::TransformGateway;
use crate::{
    assemble, declarations, AssembledComponent, BundleError, ComponentDescriptor, Diagnostic,
    DiagnosticLevel, ModuleMode, PluginArtifact,
};

// ---------------------------------------------------------------------------
// Plugin Build
// ---------------------------------------------------------------------------

/// Build a plugin bundle from raw descriptors: concurrent assembly fan-out,
/// install synthesis, then aggregation.
pub async fn build_plugin<G: TransformGateway>(
    gateway: &G,
    plugin_name: &str,
    descriptors: &[ComponentDescriptor],
    install: &InstallOptions,
    mode: ModuleMode,
) -> Result<PluginArtifact, BundleError> {
    let assemblies = descriptors.iter().map(|descriptor| {
        // The plugin name is the namespace for every member component.
        let mut themed = descriptor.clone();
        themed.theme = Some(plugin_name.to_string());
        async move { assemble::assemble_component(gateway, &themed, mode).await }
    });

    // Fail-fast: the first rejection aborts the whole build. Completion
    // order is unspecified; the collected results keep input order.
    let components = future::try_join_all(assemblies).await?;

    let install_fragment = synthesize_install(install);
    aggregate_plugin(gateway, plugin_name, &components, &install_fragment, mode).await
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Fold assembled components plus an install fragment into one named,
/// self-executing plugin bundle.
///
/// Duplicate component names collapse in the export list (first occurrence
/// wins) while every script body stays in the concatenation, so the
/// last-registered binding shadows earlier ones at runtime. An empty
/// component list still produces a well-formed artifact.
pub async fn aggregate_plugin<G: TransformGateway>(
    gateway: &G,
    plugin_name: &str,
    components: &[AssembledComponent],
    install_fragment: &str,
    mode: ModuleMode,
) -> Result<PluginArtifact, BundleError> {
    let mut names: LinkedHashSet<&str> = LinkedHashSet::new();
    let mut scripts: Vec<&str> = Vec::new();
    let mut styles: Vec<&str> = Vec::new();
    let mut declaration_lines: Vec<&str> = Vec::new();

    for component in components {
        if !names.contains(component.name.as_str()) {
            names.insert(component.name.as_str());
        }
        scripts.push(component.compiled_script.as_str());
        declaration_lines.push(component.declaration.as_str());
        if !component.compiled_style.is_empty() {
            styles.push(component.compiled_style.as_str());
        }
    }

    let export_names = names.iter().copied().collect::<Vec<_>>().join(", ");
    let script_src = PluginUnit {
        name: plugin_name,
        scripts: &scripts.join("\n"),
        export_names: &export_names,
        install: install_fragment,
        mode,
    }
    .render();
    let style_src = styles.join("\n");

    let (script, style) = tokio::try_join!(
        gateway.minify_script(&script_src),
        gateway.compile_and_minify_style(&style_src),
    )?;

    let declarations =
        declarations::plugin_declarations(plugin_name, &declaration_lines.join("\n\n"), mode);

    let diagnostics = vec![
        Diagnostic {
            level: DiagnosticLevel::Info,
            message: format!(
                "Plugin '{}' aggregated: {} components, {} distinct exports",
                plugin_name,
                components.len(),
                names.len(),
            ),
            context: None,
        },
        Diagnostic {
            level: DiagnosticLevel::Info,
            message: format!(
                "Artifacts: {} bytes script, {} bytes style, {} bytes declarations",
                script.len(),
                style.len(),
                declarations.len(),
            ),
            context: None,
        },
    ];

    Ok(PluginArtifact {
        script,
        style,
        declarations,
        diagnostics,
    })
}
