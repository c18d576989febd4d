//! Style collaborator: SCSS compilation via grass, then minification via
//! lightningcss (parse, minify, print).
//!
//! The `$NAME` token binding prepended by the assembler is an ordinary
//! variable at this layer; it is consumed during compilation and leaves no
//! trace in the emitted sheet unless the style body interpolates it.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::Browsers;

use crate::BundleError;

/// Compile a style unit to plain CSS and print it minified. Tolerates empty
/// input; fails on style syntax errors.
pub fn compile_and_minify(raw_style: &str) -> Result<String, BundleError> {
    let css = grass::from_string(raw_style, &grass::Options::default())
        .map_err(|e| BundleError::StyleTransform(e.to_string()))?;

    let mut stylesheet = StyleSheet::parse(&css, ParserOptions::default())
        .map_err(|e| BundleError::StyleTransform(format!("CSS parse error: {e:?}")))?;

    stylesheet
        .minify(MinifyOptions {
            targets: Browsers::default().into(),
            ..MinifyOptions::default()
        })
        .map_err(|e| BundleError::StyleTransform(format!("CSS minify error: {e:?}")))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| BundleError::StyleTransform(format!("CSS print error: {e:?}")))?;

    Ok(result.code)
}
