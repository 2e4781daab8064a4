//! Treedump - turn a directory subtree into a single text artifact combining
//! a box-drawing tree diagram with line-numbered file contents.
//!
//! The engine is a pure function of (root path, configuration, filesystem
//! snapshot) → output string. It mutates nothing in the target tree, holds
//! no process-wide state, and opens at most one file at a time, so callers
//! may run independent generations concurrently with their own
//! configuration snapshots.

pub mod config;
pub mod content;
pub mod error;
pub mod output;
pub mod tree;

pub use config::GenerateConfig;
pub use content::{LINE_TRUNCATION_MARKER, RenderedContent, render_content};
pub use error::GenerateError;
pub use output::{BINARY_PLACEHOLDER, INCOMPLETE_MARKER, TreeFormatter};
pub use tree::{
    NodeNote, NoopObserver, TreeNode, TreeWalker, WalkControl, WalkObserver, WalkOutcome,
};

use std::path::Path;

/// Result of one generation run.
#[derive(Debug)]
pub struct Generated {
    /// The full text artifact; the caller decides where it goes.
    pub text: String,
    /// Recoverable conditions encountered during the run. Empty means the
    /// run succeeded fully.
    pub warnings: Vec<String>,
    /// False when the observer stopped the walk early; the text is then a
    /// partial tree marked incomplete.
    pub complete: bool,
}

/// Generate the tree artifact for `root` under `config`.
pub fn generate(root: &Path, config: &GenerateConfig) -> Result<Generated, GenerateError> {
    generate_with_observer(root, config, &mut NoopObserver)
}

/// Generate with a progress/cancellation observer polled once per visited
/// entry.
pub fn generate_with_observer(
    root: &Path,
    config: &GenerateConfig,
    observer: &mut dyn WalkObserver,
) -> Result<Generated, GenerateError> {
    config.validate()?;

    let outcome = TreeWalker::new(config).walk(root, observer)?;
    let (text, mut format_warnings) = TreeFormatter::new(config).format(&outcome);

    let mut warnings = outcome.warnings;
    warnings.append(&mut format_warnings);

    Ok(Generated {
        text,
        warnings,
        complete: outcome.complete,
    })
}
