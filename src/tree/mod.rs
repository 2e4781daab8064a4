//! Directory tree model and walking logic
//!
//! This module builds the in-memory tree for one generation run:
//!
//! - `PathFilter`: per-entry include/exclude decisions
//! - `PriorityOrderer`: deterministic sibling ordering
//! - `TreeWalker`: filtered, ordered depth-first descent with cycle detection

mod filter;
mod order;
mod walker;

use std::path::{Path, PathBuf};

// Re-export public types
pub use filter::{EntryKind, PathFilter};
pub use order::{PriorityOrderer, Sibling};
pub use walker::{NoopObserver, TreeWalker, WalkControl, WalkObserver, WalkOutcome};

/// Annotation on a directory node the walk could not descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeNote {
    /// The directory could not be read; it is shown with zero children.
    PermissionDenied,
    /// The directory resolves to an ancestor on the current descent path
    /// (a symlink cycle); it is shown as a leaf and never followed.
    CircularReference,
}

/// A node in the tree built by one walk.
///
/// The tree is append-only while the walker builds it and read-only once
/// the formatter takes over; it is discarded after formatting.
#[derive(Debug, Clone)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
        note: Option<NodeNote>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    pub fn note(&self) -> Option<NodeNote> {
        match self {
            TreeNode::File { .. } => None,
            TreeNode::Dir { note, .. } => *note,
        }
    }
}
