// src/core/scanner.rs
pub mod filter;
#[cfg(test)]
pub mod test_utils;
pub mod utils;

use anyhow::{Result, bail};
use std::env;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::core::ignore::IgnoreCache;
use crate::utils::{read_lossy, split_lines};
pub use filter::{FileFilter, INCLUDE_EXTENSIONS};
use utils::{is_regular_file, relative_path, should_exclude};
pub use utils::PRUNE_DIRS;

/// Default minimum number of lines for a file to be eligible.
pub const MIN_LINES: usize = 10;

/// Filters applied on top of the fixed extension, directory and ignore-file
/// rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub min_lines: usize,
    /// Regex searched for in the relative path; only matching files are kept.
    pub include_pattern: Option<String>,
    /// Regex searched for in the relative path; matching files are dropped.
    pub ignore_pattern: Option<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_lines: MIN_LINES,
            include_pattern: None,
            ignore_pattern: None,
        }
    }
}

/// Collects every file under `root` that can be used as a round target.
///
/// # Arguments
///
/// * `root` - The directory to scan (relative paths resolve against the
///   current directory)
/// * `options` - Line threshold and optional include/ignore regexes
///
/// # Returns
///
/// * `Ok(Vec<String>)` - `/`-separated paths relative to `root`, sorted and
///   without duplicates
///
/// # Errors
///
/// This function may return an error if:
/// * Either regex is invalid ([`crate::GameError::InvalidPattern`]); this is
///   checked before the filesystem is touched
/// * `root` is not a directory
///
/// Files that cannot be read are skipped rather than failing the scan.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    let filter = FileFilter::new(
        options.include_pattern.as_deref(),
        options.ignore_pattern.as_deref(),
    )?;

    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        env::current_dir()?.join(root)
    };
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut ignore = IgnoreCache::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &root, &mut ignore))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !is_regular_file(&entry) {
            continue;
        }
        let Some(rel) = relative_path(&root, entry.path()) else {
            continue;
        };
        if !filter.accepts(&rel) {
            continue;
        }

        let content = match read_lossy(entry.path()) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %rel, error = %err, "Skipping unreadable file");
                continue;
            }
        };
        if split_lines(&content).len() < options.min_lines {
            continue;
        }

        files.push(rel);
    }

    files.sort();
    files.dedup();
    info!(count = files.len(), "Scan complete");
    Ok(files)
}
