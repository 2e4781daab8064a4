//! Configuration for a generation run

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::GenerateError;

/// Configuration for one tree-generation run.
///
/// The engine treats this as read-only: a run never mutates its
/// configuration, so one `GenerateConfig` can back multiple sequential runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Case-insensitive filename suffixes to include, e.g. `".py"`.
    /// Empty means all files are included.
    pub included_extensions: Vec<String>,
    /// Directory names (not paths) excluded anywhere in the tree.
    /// A blacklisted directory is pruned entirely; the walk never descends
    /// into it.
    pub blacklisted_folders: HashSet<String>,
    /// File names (not paths) excluded anywhere in the tree.
    pub blacklisted_files: HashSet<String>,
    /// Directory names sorted to the front of their sibling group, in the
    /// order given here.
    pub priority_folders: Vec<String>,
    /// File names sorted to the front of their sibling group, in the order
    /// given here.
    pub priority_files: Vec<String>,
    /// Maximum content lines rendered per file. 0 means unlimited.
    pub max_lines_per_file: usize,
    /// Maximum characters rendered per content line. 0 means unlimited.
    pub max_line_length: usize,
    /// Structure-only output, suppressing file contents.
    pub compact_view: bool,
}

impl GenerateConfig {
    /// Validate the configuration before a run starts.
    ///
    /// Extension entries must be non-blank and carry a leading dot so that
    /// suffix matching cannot silently match unrelated filename tails
    /// (`"py"` would match `"happy"`).
    pub fn validate(&self) -> Result<(), GenerateError> {
        for ext in &self.included_extensions {
            if ext.trim().is_empty() {
                return Err(GenerateError::InvalidConfig(
                    "blank entry in included extensions".to_string(),
                ));
            }
            if !ext.starts_with('.') {
                return Err(GenerateError::InvalidConfig(format!(
                    "extension '{}' must start with '.'",
                    ext
                )));
            }
        }
        Ok(())
    }
}
