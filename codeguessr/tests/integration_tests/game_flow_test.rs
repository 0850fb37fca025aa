// tests/integration_tests/game_flow_test.rs
use super::common::{current_target, setup_test_directory, wrong_guess};
use anyhow::Result;
use codeguessr::core::round::{ATTEMPT_POINTS, BLOCK};
use codeguessr::{
    GameError, GameSession, ScanOptions, SessionSettings, SessionStore, scan_directory,
};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

fn new_session(rounds: usize, max_guesses: usize) -> Result<(tempfile::TempDir, GameSession)> {
    let temp_dir = setup_test_directory()?;
    let files = scan_directory(temp_dir.path(), &ScanOptions::default())?;
    let settings = SessionSettings {
        rounds,
        max_guesses,
        ..SessionSettings::default()
    };
    let session =
        GameSession::create_with_rng(temp_dir.path(), files, settings, &mut StdRng::seed_from_u64(3))?;
    Ok((temp_dir, session))
}

#[test]
fn test_reveal_grows_with_wrong_guesses() -> Result<()> {
    let (_temp_dir, mut session) = new_session(1, 6)?;
    let highlight = session.current_round().map(|r| r.highlight_line()).unwrap_or_default();

    let hidden = session.current_payload().expect("round in play").code_display;
    assert!(hidden.lines().all(|line| line.chars().all(|c| c == BLOCK || c == ' ')));

    let wrong = wrong_guess(&session);
    let response = session.guess(&wrong);
    let display = response.round.expect("round continues").code_display;
    let lines: Vec<&str> = display.split('\n').collect();
    assert!(lines[highlight].contains("compute"));
    for (idx, line) in lines.iter().enumerate() {
        if idx != highlight {
            assert!(!line.contains("compute"), "line {idx} revealed too early");
        }
    }
    Ok(())
}

#[test]
fn test_final_guess_reveals_everything() -> Result<()> {
    let (_temp_dir, mut session) = new_session(2, 6)?;
    let wrong = wrong_guess(&session);
    for _ in 0..5 {
        session.guess(&wrong);
    }
    let display = session.current_payload().expect("round in play").code_display;
    assert!(!display.contains(BLOCK));
    assert_eq!(session.current_payload().map(|p| p.potential_score), Some(ATTEMPT_POINTS[5]));
    Ok(())
}

#[test]
fn test_full_game_summary() -> Result<()> {
    let (_temp_dir, mut session) = new_session(3, 2)?;

    session.guess(&current_target(&session));
    let wrong = wrong_guess(&session);
    session.guess(&wrong);
    session.guess(&current_target(&session));
    let wrong = wrong_guess(&session);
    session.guess(&wrong);
    let last = session.guess(&wrong);

    assert!(last.game_over);
    let rounds = last.rounds.expect("summary");
    let correct: Vec<bool> = rounds.iter().map(|r| r.correct).collect();
    assert_eq!(correct, vec![true, true, false]);
    assert_eq!(last.total_score, ATTEMPT_POINTS[0] + ATTEMPT_POINTS[1]);
    assert_eq!(rounds.iter().map(|r| r.points).sum::<u32>(), last.total_score);
    Ok(())
}

#[test]
fn test_store_round_trip() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut store = SessionStore::new(temp_dir.path());
    let settings = SessionSettings {
        rounds: 2,
        ..SessionSettings::default()
    };
    let game = store.new_game(&ScanOptions::default(), settings)?;
    assert_eq!(game.files.len(), 5);
    assert_eq!(game.total_rounds, 2);

    let value = serde_json::to_value(&game)?;
    assert_eq!(value["round_num"], 1);
    assert_eq!(value["potential_score"], 1000);
    assert!(value["game_id"].is_string());

    let target = store
        .get(&game.game_id)
        .map(current_target)
        .unwrap_or_default();
    let response = store.guess(&game.game_id, &target)?;
    assert!(response.round_over);
    assert!(!response.game_over);
    assert_eq!(response.round.map(|r| r.round_num), Some(2));
    Ok(())
}

#[test]
fn test_store_unknown_game() {
    let mut store = SessionStore::new(".");
    assert!(matches!(
        store.guess("nope", "main.py"),
        Err(GameError::UnknownSession(_))
    ));
}
