//! Script collaborator: TSX transpilation and minification via oxc.
//!
//! Component scripts arrive as typed, JSX-bearing text. The transpile pass
//! parses, strips types, lowers JSX through the classic runtime with the
//! `h` pragma, and prints minified. The plain minify pass is used for the
//! final concatenated plugin script, which is already ordinary JavaScript.

use std::fmt;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::{CodeGenerator, CodegenOptions};
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxOptions, JsxRuntime, TransformOptions, Transformer};

use crate::BundleError;

/// Render pragma substituted for JSX elements.
const JSX_PRAGMA: &str = "h";

/// Transpile a TSX script unit and print it minified.
pub fn transpile_and_minify(raw_script: &str) -> Result<String, BundleError> {
    let allocator = Allocator::default();
    let source_type = SourceType::tsx();

    let parsed = Parser::new(&allocator, raw_script, source_type).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(BundleError::ScriptTransform(join_errors(&parsed.errors)));
    }
    let mut program = parsed.program;

    let (symbols, scopes) = SemanticBuilder::new()
        .build(&program)
        .semantic
        .into_symbol_table_and_scope_tree();

    let options = TransformOptions {
        jsx: JsxOptions {
            runtime: JsxRuntime::Classic,
            pragma: Some(JSX_PRAGMA.to_string()),
            pragma_frag: Some("Fragment".to_string()),
            ..JsxOptions::default()
        },
        ..TransformOptions::default()
    };
    let transformed = Transformer::new(&allocator, Path::new("component.tsx"), &options)
        .build_with_symbols_and_scopes(symbols, scopes, &mut program);
    if !transformed.errors.is_empty() {
        return Err(BundleError::ScriptTransform(join_errors(
            &transformed.errors,
        )));
    }

    Ok(CodeGenerator::new()
        .with_options(CodegenOptions {
            minify: true,
            ..CodegenOptions::default()
        })
        .build(&program)
        .code)
}

/// Minify a plain script. Empty input prints to an empty result.
pub fn minify(raw_script: &str) -> Result<String, BundleError> {
    let allocator = Allocator::default();

    let parsed = Parser::new(&allocator, raw_script, SourceType::mjs()).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(BundleError::ScriptTransform(join_errors(&parsed.errors)));
    }

    Ok(CodeGenerator::new()
        .with_options(CodegenOptions {
            minify: true,
            ..CodegenOptions::default()
        })
        .build(&parsed.program)
        .code)
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
