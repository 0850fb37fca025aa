// src/utils.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads a file as text, replacing byte sequences that are not valid UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file and splits it into owned lines with [`split_lines`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(split_lines(&read_lossy(path)?)
        .into_iter()
        .map(str::to_owned)
        .collect())
}

/// Splits `text` into lines, breaking on `\n`, `\r`, `\r\n` and the other
/// Unicode line boundaries (`\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`,
/// `\u{2028}`, `\u{2029}`). A trailing break does not start an extra empty
/// line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Joins the components of a relative path with `/` regardless of platform.
/// `None` when a component is not valid UTF-8.
pub fn to_slash(path: &Path) -> Option<String> {
    path.components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join("/"))
}

/// Maps a file name to the highlight.js language used to render it.
#[must_use]
pub fn language_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ext {
        "ts" => "typescript",
        "js" => "javascript",
        "py" => "python",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "cpp" | "cc" | "cxx" => "cpp",
        "c" | "h" => "c",
        "rb" => "ruby",
        "swift" => "swift",
        "kt" => "kotlin",
        "cs" => "csharp",
        "php" => "php",
        _ => "plaintext",
    }
}
