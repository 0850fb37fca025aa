// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Source text with `num_lines` distinct, non-blank lines.
pub fn source_lines(num_lines: usize) -> String {
    (0..num_lines)
        .map(|i| format!("value_{i} = compute({i})\n"))
        .collect()
}

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let body = source_lines(20);

    create_test_file(dir.path(), "main.py", &body)?;
    create_test_file(dir.path(), "src/lib.rs", &body)?;
    create_test_file(dir.path(), "src/app.min.js", &body)?;
    create_test_file(dir.path(), ".eslintrc.js", &body)?;
    create_test_file(dir.path(), "short.go", &source_lines(3))?;
    create_test_file(dir.path(), "notes.md", &body)?;
    create_test_file(dir.path(), "node_modules/dep/index.js", &body)?;
    create_test_file(dir.path(), ".hidden/secret.py", &body)?;
    create_test_file(dir.path(), "generated/out.py", &body)?;
    create_test_file(dir.path(), ".gitignore", "generated/\n")?;

    Ok(dir)
}
