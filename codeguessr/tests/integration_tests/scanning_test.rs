// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_test_directory, source_lines};
use anyhow::Result;
use codeguessr::{GameError, ScanOptions, scan_directory};
use tempfile::TempDir;

#[test]
fn test_default_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;

    assert_eq!(
        files,
        vec![
            "logs/debug.py",
            "main.py",
            "src/lib.rs",
            "tmp/scratch.py",
            "web/app.ts"
        ],
        "Minified, short, non-code, pruned and hidden files should be skipped"
    );
    Ok(())
}

#[test]
fn test_include_pattern_limits_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = ScanOptions {
        include_pattern: Some(String::from(r"\.py$")),
        ..ScanOptions::default()
    };
    let files = scan_directory(temp_dir.path(), &options)?;
    assert_eq!(files, vec!["logs/debug.py", "main.py", "tmp/scratch.py"]);
    Ok(())
}

#[test]
fn test_ignore_pattern_drops_matches() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = ScanOptions {
        ignore_pattern: Some(String::from("^(tmp|logs)/")),
        ..ScanOptions::default()
    };
    let files = scan_directory(temp_dir.path(), &options)?;
    assert_eq!(files, vec!["main.py", "src/lib.rs", "web/app.ts"]);
    Ok(())
}

#[test]
fn test_blank_patterns_are_ignored() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = ScanOptions {
        include_pattern: Some(String::new()),
        ignore_pattern: Some(String::from("   ")),
        ..ScanOptions::default()
    };
    assert_eq!(
        scan_directory(temp_dir.path(), &options)?,
        scan_directory(temp_dir.path(), &ScanOptions::default())?
    );
    Ok(())
}

#[test]
fn test_invalid_include_pattern() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = ScanOptions {
        include_pattern: Some(String::from("[a-")),
        ..ScanOptions::default()
    };
    let err = scan_directory(temp_dir.path(), &options).expect_err("invalid regex");
    assert!(matches!(
        err.downcast_ref::<GameError>(),
        Some(GameError::InvalidPattern {
            label: "include_pattern",
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_nested_pruned_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "app/venv/lib/site.py", &source_lines(12))?;
    create_test_file(temp_dir.path(), "app/main.py", &source_lines(12))?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    assert_eq!(files, vec!["app/main.py"]);
    Ok(())
}

#[test]
fn test_hidden_file_at_any_level_is_kept() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "cfg/.prettierrc.js", &source_lines(12))?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    assert_eq!(files, vec!["cfg/.prettierrc.js"]);
    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    assert!(scan_directory(temp_dir.path(), &ScanOptions::default())?.is_empty());
    Ok(())
}
