// tests/integration_tests/common.rs
use anyhow::Result;
use codeguessr::GameSession;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn source_lines(num_lines: usize) -> String {
    (0..num_lines)
        .map(|i| format!("let value_{i} = compute({i});\n"))
        .collect()
}

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, ".gitignore", &content)
}

/// Eligible: `logs/debug.py`, `main.py`, `src/lib.rs`, `tmp/scratch.py`,
/// `web/app.ts`.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let body = source_lines(25);

    create_test_file(temp_dir.path(), "main.py", &body)?;
    create_test_file(temp_dir.path(), "src/lib.rs", &body)?;
    create_test_file(temp_dir.path(), "src/app.min.js", &body)?;
    create_test_file(temp_dir.path(), "web/app.ts", &body)?;
    create_test_file(temp_dir.path(), "tmp/scratch.py", &body)?;
    create_test_file(temp_dir.path(), "logs/debug.py", &body)?;
    create_test_file(temp_dir.path(), "short.go", &source_lines(3))?;
    create_test_file(temp_dir.path(), "notes.md", &body)?;
    create_test_file(temp_dir.path(), "node_modules/dep/index.js", &body)?;
    create_test_file(temp_dir.path(), "build/out.js", &body)?;
    create_test_file(temp_dir.path(), ".hidden/secret.py", &body)?;

    Ok(temp_dir)
}

pub fn current_target(session: &GameSession) -> String {
    session
        .current_round()
        .map(|round| round.target_file().to_owned())
        .unwrap_or_default()
}

pub fn wrong_guess(session: &GameSession) -> String {
    let target = current_target(session);
    session
        .files()
        .iter()
        .find(|file| **file != target)
        .cloned()
        .unwrap_or_default()
}
