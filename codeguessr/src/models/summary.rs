// src/models/summary.rs
use serde::Serialize;

/// The round a guess just finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedRound {
    pub round_num: usize,
    pub target_file: String,
    pub round_points: u32,
    pub wrong_guesses: Vec<String>,
    pub correct: bool,
}

/// One line of the end-of-game results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_num: usize,
    pub target_file: String,
    pub correct: bool,
    pub points: u32,
    pub wrong_guesses: Vec<String>,
}
