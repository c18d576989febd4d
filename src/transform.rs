//! Transform gateway: the functional seam to the script and style
//! compilation collaborators.
//!
//! The assembly pipeline consumes the collaborators only through this
//! contract; their internal algorithms are not part of the pipeline's
//! design. [`NativeGateway`] is the production implementation, built on the
//! oxc toolchain for scripts and the grass + lightningcss stack for styles.

pub mod script;
pub mod style;

use std::future::Future;

use crate::BundleError;

// ---------------------------------------------------------------------------
// Gateway Contract
// ---------------------------------------------------------------------------

/// The three collaborator operations the pipeline suspends on. No timeout
/// is imposed here; cancellation policy belongs to the caller.
pub trait TransformGateway: Send + Sync {
    /// Transpile a typed, JSX-bearing script unit and minify the result.
    /// Fails on script syntax errors.
    fn transpile_and_minify_script(
        &self,
        raw_script: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send;

    /// Minify an already-plain script. Tolerates empty input, returning an
    /// empty or near-empty result.
    fn minify_script(
        &self,
        raw_script: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send;

    /// Compile a style unit and minify the result. Fails on style syntax
    /// errors.
    fn compile_and_minify_style(
        &self,
        raw_style: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send;
}

// ---------------------------------------------------------------------------
// Native Gateway
// ---------------------------------------------------------------------------

/// Production gateway. The transforms are CPU-bound and complete without
/// suspension; the async surface exists for the pipeline's benefit, which
/// treats every collaborator as a suspension point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeGateway;

impl TransformGateway for NativeGateway {
    fn transpile_and_minify_script(
        &self,
        raw_script: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send {
        let result = script::transpile_and_minify(raw_script);
        async move { result }
    }

    fn minify_script(
        &self,
        raw_script: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send {
        let result = script::minify(raw_script);
        async move { result }
    }

    fn compile_and_minify_style(
        &self,
        raw_style: &str,
    ) -> impl Future<Output = Result<String, BundleError>> + Send {
        let result = style::compile_and_minify(raw_style);
        async move { result }
    }
}
