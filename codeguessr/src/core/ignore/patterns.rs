// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use tracing::warn;

use crate::core::ignore::IgnoreMatcher;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    /// `!pattern`: re-includes paths an earlier rule excluded.
    negated: bool,
    /// `pattern/`: only matches directories.
    dir_only: bool,
    /// Contains a `/` somewhere other than the end, so it is matched against
    /// the whole relative path instead of just the final component.
    anchored: bool,
}

impl Rule {
    fn matches(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            self.pattern.matches_with(path, MATCH_OPTIONS)
        } else {
            let name = path.rsplit('/').next().unwrap_or(path);
            self.pattern.matches_with(name, MATCH_OPTIONS)
        }
    }
}

/// Rules parsed from a single ignore file, in file order.
#[derive(Debug, Default)]
pub struct Patterns {
    rules: Vec<Rule>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds rules from the lines of an ignore file. Lines that are not valid
    /// patterns are logged and skipped so one typo does not disable the rest
    /// of the file.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut patterns = Self::new();
        for line in lines {
            if let Err(err) = patterns.add_pattern(line) {
                warn!(line, error = %err, "Skipping ignore pattern");
            }
        }
        patterns
    }

    /// Adds a single ignore-file line.
    ///
    /// Handles the usual `.gitignore` forms:
    /// - blank lines and `#` comments are skipped
    /// - `!` negates, `\#` and `\!` escape a leading `#` or `!`
    /// - a trailing `/` restricts the rule to directories
    /// - a `/` anywhere else anchors the rule to the ignore file's directory
    /// - `*`, `?`, `[...]` and `**` behave like git's wildmatch
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid glob syntax.
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let body = if body.starts_with("\\#") || body.starts_with("\\!") {
            &body[1..]
        } else {
            body
        };
        let (body, dir_only) = body
            .strip_suffix('/')
            .map_or((body, false), |rest| (rest, true));
        let anchored = body.contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);
        if body.is_empty() {
            return Ok(());
        }

        let pattern =
            Pattern::new(body).with_context(|| format!("Invalid ignore pattern: {line}"))?;
        self.rules.push(Rule {
            pattern,
            negated,
            dir_only,
            anchored,
        });
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The last matching rule wins; `None` when no rule mentions the path.
    fn verdict(&self, path: &str, is_dir: bool) -> Option<bool> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(path, is_dir))
            .map(|rule| !rule.negated)
    }
}

impl IgnoreMatcher for Patterns {
    fn is_match(&self, path: &str, is_dir: bool) -> bool {
        // A path inside an excluded directory stays excluded, as in git.
        for (idx, _) in path.match_indices('/') {
            if self.verdict(&path[..idx], true) == Some(true) {
                return true;
            }
        }
        self.verdict(path, is_dir) == Some(true)
    }
}
