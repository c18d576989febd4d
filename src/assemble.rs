//! Component assembly.
//!
//! One descriptor in, one sealed [`AssembledComponent`] out:
//! 1. Normalize the hyphenated name to a canonical identifier
//! 2. Build the name token (`<theme>__<identifier>` when namespaced)
//! 3. Render the self-executing script unit and the namespaced style unit
//! 4. Run both collaborator compiles concurrently and seal the result
//!
//! Collaborator rejections propagate unmodified; under the plugin build's
//! concurrent fan-out a single rejection aborts the whole build.

use crate::declarations;
use crate::templates::{ComponentUnit, NameToken};
use crate::transform::TransformGateway;
use crate::utils;
use crate::{AssembledComponent, BundleError, ComponentDescriptor, ModuleMode};

/// Assemble a single component fragment.
pub async fn assemble_component<G: TransformGateway>(
    gateway: &G,
    descriptor: &ComponentDescriptor,
    mode: ModuleMode,
) -> Result<AssembledComponent, BundleError> {
    let identifier = utils::pascal_identifier(descriptor.name.as_deref().unwrap_or(""));
    let token = NameToken::new(descriptor.theme.as_deref(), &identifier);

    let raw_script = utils::resolve_or_default(descriptor.code.as_deref(), "");
    let raw_style = utils::resolve_or_default(descriptor.style.as_deref(), "");

    let script_unit = ComponentUnit {
        identifier: &identifier,
        token: &token,
        body: &raw_script,
    }
    .render();
    let style_unit = format!("{}{}", token.style_binding(), raw_style);

    let declaration = declarations::component_declaration(
        &identifier,
        descriptor.props.as_deref(),
        descriptor.docs.as_deref(),
        mode,
    );

    let (compiled_script, compiled_style) = tokio::try_join!(
        gateway.transpile_and_minify_script(&script_unit),
        gateway.compile_and_minify_style(&style_unit),
    )?;

    Ok(AssembledComponent {
        name: identifier,
        raw_script,
        raw_style,
        props: utils::resolve_or_default(descriptor.props.as_deref(), ""),
        docs: utils::resolve_or_default(descriptor.docs.as_deref(), ""),
        compiled_script,
        compiled_style,
        declaration,
    })
}
