// src/models/response.rs
use serde::Serialize;

use crate::models::{CompletedRound, RoundPayload, RoundSummary};

/// Answer to a guess.
///
/// `completed_round` is set when the guess ended a round, `rounds` when it
/// ended the game, and `round` otherwise: the updated current round, or the
/// next round when one just finished. `round` is flattened so its fields sit
/// next to the flags in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResponse {
    pub correct: bool,
    pub round_over: bool,
    pub game_over: bool,
    pub total_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_round: Option<CompletedRound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<Vec<RoundSummary>>,
    #[serde(flatten)]
    pub round: Option<RoundPayload>,
}

impl GuessResponse {
    /// Reply for a guess that arrives after the last round ended.
    #[must_use]
    pub const fn already_over(total_score: u32) -> Self {
        Self {
            correct: false,
            round_over: true,
            game_over: true,
            total_score,
            completed_round: None,
            rounds: None,
            round: None,
        }
    }
}

/// Answer to a new-game request: the first round plus session metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGame {
    pub game_id: String,
    /// Every eligible file, for the client's file picker.
    pub files: Vec<String>,
    pub total_rounds: usize,
    pub max_guesses: usize,
    #[serde(flatten)]
    pub round: RoundPayload,
}
