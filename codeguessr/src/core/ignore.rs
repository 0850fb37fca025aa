// src/core/ignore.rs
//! Ignore-file support for the scanner.
//!
//! The scanner only talks to [`IgnoreMatcher`], so the pattern dialect can be
//! swapped without touching the directory walk. [`Patterns`] implements the
//! `.gitignore` dialect on top of `glob`.

pub mod loader;
pub mod patterns;

pub use loader::{IGNORE_FILE_NAME, IgnoreCache, Loader, load_ignore_file};
pub use patterns::Patterns;

/// Decides whether a path, relative to the directory that owns the rules,
/// is excluded.
pub trait IgnoreMatcher {
    /// `path` uses `/` separators and never has a leading or trailing slash.
    fn is_match(&self, path: &str, is_dir: bool) -> bool;
}
