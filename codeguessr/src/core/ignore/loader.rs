// src/core/ignore/loader.rs
use crate::core::ignore::{IgnoreMatcher, Patterns};
use crate::utils::read_lossy;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Produces the matcher for one directory, or `None` when it has no rules.
pub type Loader = fn(&Path) -> Result<Option<Box<dyn IgnoreMatcher>>>;

/// Loads the `.gitignore` file that lives directly in `dir`.
///
/// Unlike git itself, parent directories are not consulted here: the scanner
/// asks for every directory between the scan root and a path, and each
/// directory's rules only see the part of the path below that directory.
///
/// # Errors
///
/// Returns an error if an ignore file exists but cannot be read.
#[inline]
pub fn load_ignore_file(dir: &Path) -> Result<Option<Box<dyn IgnoreMatcher>>> {
    let ignore_file = dir.join(IGNORE_FILE_NAME);
    if !ignore_file.is_file() {
        return Ok(None);
    }

    let content = read_lossy(&ignore_file)?;
    let patterns = Patterns::from_lines(content.lines());
    debug!(path = %ignore_file.display(), "Loaded ignore file");
    Ok(Some(Box::new(patterns)))
}

/// Lazily loaded ignore rules, one entry per directory visited during a scan.
///
/// A cache is meant to live for exactly one scan so edits to ignore files are
/// picked up by the next one.
pub struct IgnoreCache {
    loader: Loader,
    entries: HashMap<PathBuf, Option<Box<dyn IgnoreMatcher>>>,
}

impl IgnoreCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_loader(load_ignore_file)
    }

    #[must_use]
    pub fn with_loader(loader: Loader) -> Self {
        Self {
            loader,
            entries: HashMap::new(),
        }
    }

    fn matcher_for(&mut self, dir: &Path) -> Option<&dyn IgnoreMatcher> {
        let loader = self.loader;
        self.entries
            .entry(dir.to_path_buf())
            .or_insert_with(|| {
                loader(dir).unwrap_or_else(|err| {
                    warn!(dir = %dir.display(), error = %err, "Ignoring unreadable ignore file");
                    None
                })
            })
            .as_deref()
    }

    /// Checks `rel` (relative to `root`, `/`-separated) against the rules of
    /// `root` and of every directory between `root` and `rel`. Each
    /// directory's rules are matched against the remainder of the path below
    /// it, so a rule in `pkg/.gitignore` never affects files outside `pkg/`.
    pub fn is_ignored(&mut self, root: &Path, rel: &str, is_dir: bool) -> bool {
        let parts: Vec<&str> = rel.split('/').collect();
        let mut dir = root.to_path_buf();
        for (idx, part) in parts.iter().enumerate() {
            let remainder = parts[idx..].join("/");
            if self
                .matcher_for(&dir)
                .is_some_and(|matcher| matcher.is_match(&remainder, is_dir))
            {
                return true;
            }
            dir.push(part);
        }
        false
    }

    /// Number of directories whose rules have been looked up so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IgnoreCache {
    fn default() -> Self {
        Self::new()
    }
}
