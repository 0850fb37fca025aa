// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, source_lines};
use anyhow::Result;
use codeguessr::{GameError, GameSession, ScanOptions, SessionSettings, scan_directory};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_single_file_pool_repeats_target() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "only.rs", &source_lines(30))?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;

    let mut session = GameSession::create(temp_dir.path(), files, SessionSettings::default())?;
    assert_eq!(session.round_count(), 5);
    for _ in 0..5 {
        let response = session.guess("only.rs");
        assert!(response.correct);
    }
    assert!(session.is_game_over());
    assert_eq!(session.total_score(), 5000);
    Ok(())
}

#[test]
fn test_all_blank_file_is_playable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "blank.py", &"\n".repeat(12))?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    assert_eq!(files, vec!["blank.py"]);

    let session = GameSession::create(
        temp_dir.path(),
        files,
        SessionSettings {
            rounds: 1,
            ..SessionSettings::default()
        },
    )?;
    let highlight = session.current_round().map(|r| r.highlight_line());
    assert!(highlight.is_some_and(|line| line < 12));
    Ok(())
}

#[test]
fn test_windows_line_endings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content = source_lines(11).replace('\n', "\r\n");
    create_test_file(temp_dir.path(), "crlf.cs", &content)?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    assert_eq!(files, vec!["crlf.cs"]);

    let session = GameSession::create(temp_dir.path(), files, SessionSettings::default())?;
    let display = session.current_payload().map(|p| p.code_display).unwrap_or_default();
    assert!(!display.contains('\r'));
    assert_eq!(display.split('\n').count(), 11);
    Ok(())
}

#[test]
fn test_empty_pool() {
    let err = GameSession::create(Path::new("."), Vec::new(), SessionSettings::default())
        .expect_err("empty pool");
    assert!(matches!(
        err.downcast_ref::<GameError>(),
        Some(GameError::NoEligibleFiles)
    ));
}

#[test]
fn test_guess_is_exact_match() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "src/Main.java", &source_lines(15))?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    let mut session = GameSession::create(
        temp_dir.path(),
        files,
        SessionSettings {
            rounds: 1,
            ..SessionSettings::default()
        },
    )?;

    assert!(!session.guess("src/main.java").correct);
    assert!(!session.guess("./src/Main.java").correct);
    assert!(session.guess("src/Main.java").correct);
    Ok(())
}

#[test]
fn test_min_lines_option() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "tiny.rb", &source_lines(4))?;
    let options = ScanOptions {
        min_lines: 4,
        ..ScanOptions::default()
    };
    assert_eq!(scan_directory(temp_dir.path(), &options)?, vec!["tiny.rb"]);
    assert!(scan_directory(temp_dir.path(), &ScanOptions::default())?.is_empty());
    Ok(())
}
