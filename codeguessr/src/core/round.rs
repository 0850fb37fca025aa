// src/core/round.rs
//! State of a single guess-the-file round.
//!
//! A round starts `Active` and ends either `Won` (the target was named) or
//! `Exhausted` (`max_guesses` wrong guesses). Each wrong guess lowers the
//! score on offer and reveals more of the file around the highlight line.

use std::ops::Range;

use crate::error::RoundClosed;

/// Default number of wrong guesses a round tolerates.
pub const MAX_GUESSES_PER_ROUND: usize = 6;

/// Points for a correct guess, indexed by the wrong guesses made before it.
pub const ATTEMPT_POINTS: [u32; 6] = [1000, 800, 600, 400, 200, 100];

/// Glyph that replaces every non-whitespace character of hidden code.
pub const BLOCK: char = '\u{2588}';

/// How much of the file is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Hidden,
    /// Lines within this many lines of the highlight are visible.
    Radius(usize),
    Full,
}

/// Reveal stage indexed by wrong-guess count, aligned with [`ATTEMPT_POINTS`].
pub const REVEAL_STAGES: [RevealStage; 6] = [
    RevealStage::Hidden,
    RevealStage::Radius(0),
    RevealStage::Radius(3),
    RevealStage::Radius(8),
    RevealStage::Radius(15),
    RevealStage::Full,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// Points on offer after `wrong` wrong guesses.
#[must_use]
pub fn points_for(wrong: usize) -> u32 {
    ATTEMPT_POINTS[wrong.min(ATTEMPT_POINTS.len() - 1)]
}

#[must_use]
pub fn stage_for(wrong: usize) -> RevealStage {
    REVEAL_STAGES[wrong.min(REVEAL_STAGES.len() - 1)]
}

/// Replaces every non-whitespace character with [`BLOCK`].
#[must_use]
pub fn obscure(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_whitespace() { c } else { BLOCK })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target_file: String,
    highlight_line: usize,
    max_guesses: usize,
    wrong_guesses: Vec<String>,
    correct: bool,
    points_earned: u32,
}

impl RoundState {
    #[must_use]
    pub const fn new(target_file: String, highlight_line: usize, max_guesses: usize) -> Self {
        Self {
            target_file,
            highlight_line,
            max_guesses,
            wrong_guesses: Vec::new(),
            correct: false,
            points_earned: 0,
        }
    }

    #[must_use]
    pub fn target_file(&self) -> &str {
        &self.target_file
    }

    #[must_use]
    pub const fn highlight_line(&self) -> usize {
        self.highlight_line
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> &[String] {
        &self.wrong_guesses
    }

    #[must_use]
    pub fn num_wrong(&self) -> usize {
        self.wrong_guesses.len()
    }

    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Zero until the round is won.
    #[must_use]
    pub const fn points_earned(&self) -> u32 {
        self.points_earned
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.correct {
            RoundStatus::Won
        } else if self.num_wrong() >= self.max_guesses {
            RoundStatus::Exhausted
        } else {
            RoundStatus::Active
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != RoundStatus::Active
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.num_wrong())
    }

    /// Points a correct guess would earn right now.
    #[must_use]
    pub fn potential_score(&self) -> u32 {
        points_for(self.num_wrong())
    }

    #[must_use]
    pub fn reveal_stage(&self) -> RevealStage {
        stage_for(self.num_wrong())
    }

    /// Indices of the lines shown verbatim in a file of `line_count` lines.
    #[must_use]
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        match self.reveal_stage() {
            RevealStage::Hidden => 0..0,
            RevealStage::Full => 0..line_count,
            RevealStage::Radius(radius) => {
                let start = self.highlight_line.saturating_sub(radius).min(line_count);
                let end = self
                    .highlight_line
                    .saturating_add(radius)
                    .saturating_add(1)
                    .min(line_count);
                start..end
            }
        }
    }

    /// Renders the target's lines for the current reveal stage. Hidden lines
    /// keep their length and whitespace so the shape of the code shows.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let visible = self.visible_lines(lines.len());
        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let line = line.as_ref();
                if visible.contains(&idx) {
                    line.to_owned()
                } else {
                    obscure(line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Records a guess.
    ///
    /// A correct guess wins the round and locks in [`Self::potential_score`].
    /// A wrong guess is appended even if it repeats an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`RoundClosed`] without changing anything when the round is
    /// already won or exhausted.
    pub fn submit_guess(&mut self, file_path: &str) -> Result<GuessOutcome, RoundClosed> {
        if self.is_over() {
            return Err(RoundClosed);
        }
        if file_path == self.target_file {
            self.points_earned = self.potential_score();
            self.correct = true;
            return Ok(GuessOutcome::Correct);
        }
        self.wrong_guesses.push(file_path.to_owned());
        Ok(GuessOutcome::Incorrect)
    }
}
