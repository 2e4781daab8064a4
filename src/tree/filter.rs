//! Per-entry filtering for tree walking

use crate::config::GenerateConfig;

/// Kind of a directory entry as seen by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Pure include/exclude predicate over one configuration.
///
/// Rules in precedence order: folder blacklist, file blacklist, extension
/// allow-list, include. Directories are never filtered by extension.
pub struct PathFilter<'a> {
    config: &'a GenerateConfig,
    // Lowered once so suffix matching stays case-insensitive without
    // re-allocating per entry.
    extensions_lower: Vec<String>,
}

impl<'a> PathFilter<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        let extensions_lower = config
            .included_extensions
            .iter()
            .map(|e| e.to_lowercase())
            .collect();
        Self {
            config,
            extensions_lower,
        }
    }

    /// Decide whether an entry is included, by exact name and kind.
    pub fn should_include(&self, name: &str, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Directory => !self.config.blacklisted_folders.contains(name),
            EntryKind::File => {
                if self.config.blacklisted_files.contains(name) {
                    return false;
                }
                if self.extensions_lower.is_empty() {
                    return true;
                }
                let lower = name.to_lowercase();
                self.extensions_lower.iter().any(|ext| lower.ends_with(ext))
            }
        }
    }
}
