// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, play, run};
pub use crate::config::GameConfig;
pub use crate::core::highlight::pick_highlight;
pub use crate::core::round::{GuessOutcome, RoundState, RoundStatus};
pub use crate::core::scanner::{ScanOptions, scan_directory};
pub use crate::core::session::{GameSession, SessionSettings};
pub use crate::core::store::SessionStore;
pub use crate::error::{GameError, RoundClosed};
pub use crate::models::{CompletedRound, GuessResponse, NewGame, RoundPayload, RoundSummary};
