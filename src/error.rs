//! Error types for tree generation

use std::path::PathBuf;

/// Fatal errors that abort a generation run before or during the walk.
///
/// Recoverable conditions (unreadable files, permission-denied
/// subdirectories, symlink cycles) never surface here; they are folded into
/// the output as placeholder nodes and reported through
/// [`Generated::warnings`](crate::Generated).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("root path not found: {0}")]
    RootNotFound(PathBuf),

    #[error("root path is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
