//! Tree formatting
//!
//! Renders the in-memory tree model into the final text artifact. Two
//! layouts share the same box-drawing structural diagram:
//!
//! - detailed: each file followed by its line-numbered content block
//! - compact: structure only, no content
//!
//! Both are whitespace-deterministic so repeated runs on unchanged inputs
//! diff clean.

mod compact;
mod detailed;

use crate::config::GenerateConfig;
use crate::tree::{NodeNote, TreeNode, WalkOutcome};

pub use compact::CompactFormatter;
pub use detailed::DetailedFormatter;

/// Placeholder emitted in place of binary file content.
pub const BINARY_PLACEHOLDER: &str = "[Binary file not shown]";

/// Final line appended when the walk was stopped before completion.
pub const INCOMPLETE_MARKER: &str = "[tree incomplete: walk stopped before completion]";

/// Formatter for one walk outcome, dispatching on the configured layout.
pub struct TreeFormatter<'a> {
    config: &'a GenerateConfig,
}

impl<'a> TreeFormatter<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        Self { config }
    }

    /// Render the outcome to text, returning any warnings raised while
    /// reading file contents.
    pub fn format(&self, outcome: &WalkOutcome) -> (String, Vec<String>) {
        let (mut text, warnings) = if self.config.compact_view {
            (CompactFormatter::new().format(&outcome.root), Vec::new())
        } else {
            DetailedFormatter::new(self.config).format(&outcome.root)
        };
        if !outcome.complete {
            text.push_str(INCOMPLETE_MARKER);
            text.push('\n');
        }
        (text, warnings)
    }
}

/// Connector for one node line.
pub(crate) fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix carried into a node's children: a bar while the parent still has
/// siblings below it, blank padding otherwise.
pub(crate) fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Display label for a node, with the walk's annotation when present.
pub(crate) fn node_label(node: &TreeNode) -> String {
    match node.note() {
        Some(NodeNote::PermissionDenied) => format!("{} [permission denied]", node.name()),
        Some(NodeNote::CircularReference) => format!("{} [circular reference]", node.name()),
        None => node.name().to_string(),
    }
}
