// src/models/payload.rs
use serde::Serialize;

/// Everything a client needs to draw the round in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundPayload {
    /// One-based.
    pub round_num: usize,
    pub code_display: String,
    /// Zero-based line the reveal grows around.
    pub highlight_line: usize,
    pub potential_score: u32,
    pub guesses_remaining: usize,
    pub wrong_guesses: Vec<String>,
    /// highlight.js language name.
    pub language: String,
}
