//! Deterministic sibling ordering with priority lists

use std::collections::HashMap;
use std::path::PathBuf;

/// One surviving directory entry, as handed to the orderer by the walker.
#[derive(Debug, Clone)]
pub struct Sibling {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Orders sibling entries: directories before files, priority-listed names
/// first within each partition, remainder case-insensitive alphabetical.
///
/// The priority lists are immutable per run; if a name appears in a list
/// more than once, only its first occurrence governs.
pub struct PriorityOrderer {
    folder_rank: HashMap<String, usize>,
    file_rank: HashMap<String, usize>,
}

impl PriorityOrderer {
    pub fn new(priority_folders: &[String], priority_files: &[String]) -> Self {
        Self {
            folder_rank: build_rank(priority_folders),
            file_rank: build_rank(priority_files),
        }
    }

    /// Produce the final sibling order for one directory level.
    pub fn order(&self, entries: Vec<Sibling>) -> Vec<Sibling> {
        let (mut dirs, mut files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.is_dir);

        sort_partition(&mut dirs, &self.folder_rank);
        sort_partition(&mut files, &self.file_rank);

        dirs.extend(files);
        dirs
    }
}

fn build_rank(names: &[String]) -> HashMap<String, usize> {
    let mut rank = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        rank.entry(name.clone()).or_insert(i);
    }
    rank
}

fn sort_partition(entries: &mut [Sibling], rank: &HashMap<String, usize>) {
    entries.sort_by_cached_key(|e| {
        let r = rank.get(&e.name).copied().unwrap_or(usize::MAX);
        // Case-insensitive tie-break, then exact name so equal-ignoring-case
        // siblings still order deterministically.
        (r, e.name.to_lowercase(), e.name.clone())
    });
}
