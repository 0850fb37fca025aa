// src/core/store.rs
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::core::scanner::{ScanOptions, scan_directory};
use crate::core::session::{GameSession, SessionSettings};
use crate::error::GameError;
use crate::models::{GuessResponse, NewGame};

/// Live games for one code directory, keyed by session id.
///
/// Callers that share a store across threads wrap it in a lock; a guess
/// mutates exactly one session.
#[derive(Debug)]
pub struct SessionStore {
    root: PathBuf,
    sessions: HashMap<String, GameSession>,
}

impl SessionStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sessions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans with `options`, starts a game and keeps it.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * A pattern is not a valid regex ([`GameError::InvalidPattern`])
    /// * No file qualifies ([`GameError::NoEligibleFiles`])
    /// * `settings` are invalid or a target cannot be read
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn new_game(&mut self, options: &ScanOptions, settings: SessionSettings) -> Result<NewGame> {
        let files = scan_directory(&self.root, options)?;
        if files.is_empty() {
            return Err(GameError::NoEligibleFiles.into());
        }

        let session = GameSession::create(&self.root, files, settings)?;
        let Some(round) = session.current_payload() else {
            return Err(GameError::NoEligibleFiles.into());
        };
        let response = NewGame {
            game_id: session.id().to_owned(),
            files: session.files().to_vec(),
            total_rounds: session.round_count(),
            max_guesses: settings.max_guesses,
            round,
        };
        info!(game_id = %response.game_id, "Started game");
        self.sessions.insert(response.game_id.clone(), session);
        Ok(response)
    }

    /// # Errors
    ///
    /// Returns [`GameError::UnknownSession`] if no game has id `game_id`.
    pub fn guess(&mut self, game_id: &str, file_path: &str) -> Result<GuessResponse, GameError> {
        self.sessions
            .get_mut(game_id)
            .map(|session| session.guess(file_path))
            .ok_or_else(|| GameError::UnknownSession(game_id.to_owned()))
    }

    #[must_use]
    pub fn get(&self, game_id: &str) -> Option<&GameSession> {
        self.sessions.get(game_id)
    }

    pub fn remove(&mut self, game_id: &str) -> Option<GameSession> {
        self.sessions.remove(game_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
