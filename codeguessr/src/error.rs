// src/error.rs
use thiserror::Error;

/// Failures a host has to tell apart, e.g. to answer with a validation error
/// instead of a server error.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid {label}: {source}")]
    InvalidPattern {
        label: &'static str,
        source: regex::Error,
    },

    #[error("No qualifying files found with the current filter settings.")]
    NoEligibleFiles,

    #[error("Game not found: {0}")]
    UnknownSession(String),

    #[error("Invalid {name}: {reason}")]
    InvalidSettings { name: &'static str, reason: String },
}

/// Returned when a guess reaches a round that is already won or exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("round is already over")]
pub struct RoundClosed;
