// src/core/scanner/utils.rs
use std::path::Path;
use tracing::debug;

use crate::core::ignore::IgnoreCache;
use crate::utils::{is_hidden, to_slash};

/// Infrastructure directories that never contain interesting code.
pub const PRUNE_DIRS: [&str; 7] = [
    "node_modules",
    ".git",
    "__pycache__",
    "dist",
    "build",
    "venv",
    ".venv",
];

/// Determines if a directory entry should be dropped before the walk goes any
/// further. Returning `true` for a directory prunes its whole subtree.
///
/// An entry is excluded when:
/// - it is a directory named in [`PRUNE_DIRS`] or starting with `.`
/// - a `.gitignore` between `root` and the entry matches it
/// - its path below `root` is not valid UTF-8, so it could not be reported
///   as a playable path
///
/// The scan root itself is never excluded.
pub fn should_exclude(entry: &walkdir::DirEntry, root: &Path, ignore: &mut IgnoreCache) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    let is_dir = entry.file_type().is_dir();
    if is_dir {
        if is_hidden(entry) {
            return true;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| PRUNE_DIRS.contains(&name))
        {
            return true;
        }
    }

    let Some(rel) = relative_path(root, entry.path()) else {
        debug!(path = %entry.path().display(), "Skipping path that is not valid UTF-8");
        return true;
    };
    ignore.is_ignored(root, &rel, is_dir)
}

/// `/`-separated path of `path` below `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root).ok().and_then(to_slash)
}

/// Regular files, plus symlinks that resolve to one.
pub fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
