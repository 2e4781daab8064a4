//! TreeWalker - builds the filtered, ordered tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::GenerateConfig;
use crate::error::GenerateError;

use super::{EntryKind, NodeNote, PathFilter, PriorityOrderer, Sibling, TreeNode};

/// Signal returned by a [`WalkObserver`] at each checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    Stop,
}

/// Cooperative progress/cancellation hook, polled once per visited entry.
///
/// Returning [`WalkControl::Stop`] terminates the walk early; the partial
/// tree gathered so far is still formatted, marked incomplete. This is the
/// only cancellation primitive the engine provides; hosts build timeouts on
/// top of it.
pub trait WalkObserver {
    fn visited(&mut self, path: &Path, count: usize) -> WalkControl;
}

/// Observer that never stops the walk.
pub struct NoopObserver;

impl WalkObserver for NoopObserver {
    fn visited(&mut self, _path: &Path, _count: usize) -> WalkControl {
        WalkControl::Continue
    }
}

/// Result of one walk: the tree plus everything the formatter and caller
/// need to report partial failures.
#[derive(Debug)]
pub struct WalkOutcome {
    pub root: TreeNode,
    /// One entry per recoverable condition encountered during the walk.
    pub warnings: Vec<String>,
    /// False when the observer stopped the walk before it finished.
    pub complete: bool,
}

/// Recursive depth-first walker.
///
/// Applies [`PathFilter`] and [`PriorityOrderer`] at each level and carries
/// a canonical ancestor set down the descent path so symlink cycles
/// terminate as marked leaves instead of recursing forever. Only root-path
/// validation is fatal; everything else degrades to a placeholder node and
/// a warning.
pub struct TreeWalker<'a> {
    filter: PathFilter<'a>,
    orderer: PriorityOrderer,
    visited: usize,
    warnings: Vec<String>,
    stopped: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        Self {
            filter: PathFilter::new(config),
            orderer: PriorityOrderer::new(&config.priority_folders, &config.priority_files),
            visited: 0,
            warnings: Vec::new(),
            stopped: false,
        }
    }

    /// Walk `root` and build the tree model.
    pub fn walk(
        mut self,
        root: &Path,
        observer: &mut dyn WalkObserver,
    ) -> Result<WalkOutcome, GenerateError> {
        let metadata = match fs::metadata(root) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GenerateError::RootNotFound(root.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_dir() {
            return Err(GenerateError::RootNotADirectory(root.to_path_buf()));
        }

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        let mut ancestors = Vec::new();
        let root_node = self.walk_dir(root, name, &mut ancestors, observer);

        Ok(WalkOutcome {
            root: root_node,
            warnings: self.warnings,
            complete: !self.stopped,
        })
    }

    fn walk_dir(
        &mut self,
        path: &Path,
        name: String,
        ancestors: &mut Vec<PathBuf>,
        observer: &mut dyn WalkObserver,
    ) -> TreeNode {
        // Resolve symlinks before descent so a link back up the current
        // path is caught as a cycle, not followed.
        let canonical = fs::canonicalize(path).ok();
        if let Some(c) = canonical.as_ref() {
            if ancestors.contains(c) {
                warn!("circular reference at {}", path.display());
                self.warnings
                    .push(format!("circular reference: {}", path.display()));
                return TreeNode::Dir {
                    name,
                    path: path.to_path_buf(),
                    children: Vec::new(),
                    note: Some(NodeNote::CircularReference),
                };
            }
        }

        let entries = match fs::read_dir(path) {
            Ok(iter) => iter,
            Err(e) => {
                warn!("cannot read directory {}: {}", path.display(), e);
                self.warnings
                    .push(format!("cannot read directory {}: {}", path.display(), e));
                return TreeNode::Dir {
                    name,
                    path: path.to_path_buf(),
                    children: Vec::new(),
                    note: Some(NodeNote::PermissionDenied),
                };
            }
        };
        debug!("descending into {}", path.display());

        let mut siblings = Vec::new();
        for entry in entries.flatten() {
            let entry_path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    self.warnings
                        .push(format!("cannot stat {}: {}", entry_path.display(), e));
                    continue;
                }
            };
            // A symlink counts as whatever its target is; broken links fall
            // through as files and render an inline read error.
            let is_dir = if file_type.is_symlink() {
                entry_path.metadata().map(|m| m.is_dir()).unwrap_or(false)
            } else {
                file_type.is_dir()
            };

            let entry_name = entry.file_name().to_string_lossy().to_string();
            let kind = if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            if !self.filter.should_include(&entry_name, kind) {
                continue;
            }
            siblings.push(Sibling {
                name: entry_name,
                path: entry_path,
                is_dir,
            });
        }

        let pushed = if let Some(c) = canonical {
            ancestors.push(c);
            true
        } else {
            false
        };

        let mut children = Vec::new();
        for sibling in self.orderer.order(siblings) {
            if self.stopped {
                break;
            }
            self.visited += 1;
            if observer.visited(&sibling.path, self.visited) == WalkControl::Stop {
                self.stopped = true;
                break;
            }
            if sibling.is_dir {
                children.push(self.walk_dir(&sibling.path, sibling.name, ancestors, observer));
            } else {
                children.push(TreeNode::File {
                    name: sibling.name,
                    path: sibling.path,
                });
            }
        }

        if pushed {
            ancestors.pop();
        }

        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
            note: None,
        }
    }
}
