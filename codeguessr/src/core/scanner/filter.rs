// src/core/scanner/filter.rs
use regex::Regex;
use std::path::Path;

use crate::error::GameError;

/// Extensions (lower-case, without the dot) of files that can become targets.
pub const INCLUDE_EXTENSIONS: [&str; 13] = [
    "py", "js", "ts", "go", "rs", "java", "cpp", "c", "rb", "swift", "kt", "cs", "php",
];

const MINIFIED_SUFFIX: &str = ".min.js";

/// Name-based checks applied to every candidate file before it is read.
#[derive(Debug, Default)]
pub struct FileFilter {
    include: Option<Regex>,
    ignore: Option<Regex>,
}

impl FileFilter {
    /// Compiles the optional include/ignore regexes. Blank patterns count as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPattern`] naming the offending option when
    /// either pattern is not a valid regular expression.
    pub fn new(include: Option<&str>, ignore: Option<&str>) -> Result<Self, GameError> {
        Ok(Self {
            include: compile("include_pattern", include)?,
            ignore: compile("ignore_pattern", ignore)?,
        })
    }

    /// `rel` is the `/`-separated path relative to the scan root.
    #[must_use]
    pub fn accepts(&self, rel: &str) -> bool {
        let path = Path::new(rel);
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !has_supported_extension(path) {
            return false;
        }
        if name.to_lowercase().ends_with(MINIFIED_SUFFIX) {
            return false;
        }
        if self.include.as_ref().is_some_and(|re| !re.is_match(rel)) {
            return false;
        }
        if self.ignore.as_ref().is_some_and(|re| re.is_match(rel)) {
            return false;
        }
        true
    }
}

fn compile(label: &'static str, pattern: Option<&str>) -> Result<Option<Regex>, GameError> {
    match pattern.map(str::trim).filter(|p| !p.is_empty()) {
        Some(pattern) => Regex::new(pattern)
            .map(Some)
            .map_err(|source| GameError::InvalidPattern { label, source }),
        None => Ok(None),
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| INCLUDE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
