// src/core/session.rs
pub mod sampling;

use anyhow::{Context as _, Result};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::core::highlight::pick_highlight;
use crate::core::round::{GuessOutcome, MAX_GUESSES_PER_ROUND, RoundState};
use crate::error::GameError;
use crate::models::{CompletedRound, GuessResponse, RoundPayload, RoundSummary};
use crate::utils::{language_for, read_lines};
pub use sampling::Sampling;

/// Default number of rounds in a game.
pub const NUM_ROUNDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub rounds: usize,
    pub max_guesses: usize,
    /// Minimum non-whitespace characters for the highlighted line.
    pub min_line_chars: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            rounds: NUM_ROUNDS,
            max_guesses: MAX_GUESSES_PER_ROUND,
            min_line_chars: 1,
        }
    }
}

impl SessionSettings {
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSettings`] when a game would have no rounds
    /// or rounds that end before the first guess.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rounds == 0 {
            return Err(GameError::InvalidSettings {
                name: "rounds",
                reason: String::from("must be at least 1"),
            });
        }
        if self.max_guesses == 0 {
            return Err(GameError::InvalidSettings {
                name: "max_guesses",
                reason: String::from("must be at least 1"),
            });
        }
        Ok(())
    }
}

/// A multi-round game over a fixed set of eligible files.
///
/// Target contents are read once when the session is created, so later
/// payloads never touch the filesystem.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: String,
    root: PathBuf,
    files: Vec<String>,
    rounds: Vec<RoundState>,
    sources: Vec<Vec<String>>,
    current_round_idx: usize,
}

impl GameSession {
    /// Samples targets from `files` and picks a highlight line for each.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `files` is empty ([`GameError::NoEligibleFiles`])
    /// * `settings` are invalid ([`GameError::InvalidSettings`])
    /// * a sampled target cannot be read
    pub fn create(root: &Path, files: Vec<String>, settings: SessionSettings) -> Result<Self> {
        Self::create_with_rng(root, files, settings, &mut rand::thread_rng())
    }

    /// [`Self::create`] with a caller-provided random source.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    #[instrument(skip_all, fields(root = %root.display(), pool = files.len()))]
    pub fn create_with_rng<R: Rng + ?Sized>(
        root: &Path,
        files: Vec<String>,
        settings: SessionSettings,
        rng: &mut R,
    ) -> Result<Self> {
        if files.is_empty() {
            return Err(GameError::NoEligibleFiles.into());
        }
        settings.validate()?;

        let root = std::path::absolute(root)
            .with_context(|| format!("Failed to resolve {}", root.display()))?;
        let sampling = Sampling::for_pool(files.len(), settings.rounds);
        let targets = sampling.sample(&files, settings.rounds, rng);

        let mut rounds = Vec::with_capacity(targets.len());
        let mut sources = Vec::with_capacity(targets.len());
        for target in targets {
            let lines = read_lines(&root.join(&target))
                .with_context(|| format!("Failed to load round target {target}"))?;
            let highlight = pick_highlight(&lines, settings.min_line_chars, rng);
            debug!(target = %target, highlight, "Prepared round");
            rounds.push(RoundState::new(target, highlight, settings.max_guesses));
            sources.push(lines);
        }

        let id = Uuid::new_v4().to_string();
        info!(session_id = %id, rounds = rounds.len(), ?sampling, "Created game session");
        Ok(Self {
            id,
            root,
            files,
            rounds,
            sources,
            current_round_idx: 0,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every eligible file, sorted, as snapshotted at creation.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundState] {
        &self.rounds
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub const fn current_round_index(&self) -> usize {
        self.current_round_idx
    }

    /// `None` once the game is over.
    #[must_use]
    pub fn current_round(&self) -> Option<&RoundState> {
        self.rounds.get(self.current_round_idx)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.current_round_idx >= self.rounds.len()
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.rounds.iter().map(RoundState::points_earned).sum()
    }

    /// Display state of the round in play, `None` once the game is over.
    #[must_use]
    pub fn current_payload(&self) -> Option<RoundPayload> {
        let round = self.current_round()?;
        let lines = self.sources.get(self.current_round_idx)?;
        Some(RoundPayload {
            round_num: self.current_round_idx + 1,
            code_display: round.render(lines),
            highlight_line: round.highlight_line(),
            potential_score: round.potential_score(),
            guesses_remaining: round.guesses_remaining(),
            wrong_guesses: round.wrong_guesses().to_vec(),
            language: language_for(round.target_file()).to_owned(),
        })
    }

    /// Results for every round, in order.
    #[must_use]
    pub fn summaries(&self) -> Vec<RoundSummary> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(idx, round)| RoundSummary {
                round_num: idx + 1,
                target_file: round.target_file().to_owned(),
                correct: round.is_correct(),
                points: round.points_earned(),
                wrong_guesses: round.wrong_guesses().to_vec(),
            })
            .collect()
    }

    /// Applies a guess to the current round and moves on when it ends.
    ///
    /// Guesses after the last round get [`GuessResponse::already_over`] and
    /// change nothing.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn guess(&mut self, file_path: &str) -> GuessResponse {
        let completed_idx = self.current_round_idx;
        let Some(round) = self.rounds.get_mut(completed_idx) else {
            debug!("Guess after game over");
            return GuessResponse::already_over(self.total_score());
        };

        let correct = matches!(round.submit_guess(file_path), Ok(GuessOutcome::Correct));
        let round_over = round.is_over();
        let mut game_over = false;
        if round_over {
            self.current_round_idx += 1;
            game_over = self.is_game_over();
            info!(
                round = completed_idx + 1,
                correct,
                game_over,
                "Round finished"
            );
        }

        let completed_round = if round_over {
            self.rounds.get(completed_idx).map(|round| CompletedRound {
                round_num: completed_idx + 1,
                target_file: round.target_file().to_owned(),
                round_points: round.points_earned(),
                wrong_guesses: round.wrong_guesses().to_vec(),
                correct: round.is_correct(),
            })
        } else {
            None
        };

        GuessResponse {
            correct,
            round_over,
            game_over,
            total_score: self.total_score(),
            completed_round,
            rounds: game_over.then(|| self.summaries()),
            round: self.current_payload(),
        }
    }
}
