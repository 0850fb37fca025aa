// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::scanner::scan_directory;
use crate::core::store::SessionStore;
use crate::error::GameError;
use crate::models::{GuessResponse, NewGame, RoundPayload, RoundSummary};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory with the code to play on (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Print the eligible files and exit
    #[arg(short, long)]
    pub list: bool,

    /// Number of rounds per game
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Guesses allowed per round
    #[arg(short = 'g', long)]
    pub max_guesses: Option<usize>,

    /// Minimum lines for a file to be eligible
    #[arg(long)]
    pub min_lines: Option<usize>,

    /// Minimum non-whitespace characters on the highlighted line
    #[arg(long)]
    pub min_line_chars: Option<usize>,

    /// Only use files whose path matches this regex
    #[arg(short, long)]
    pub include: Option<String>,

    /// Skip files whose path matches this regex
    #[arg(short = 'x', long)]
    pub ignore: Option<String>,

    /// Config file (defaults to codeguessr.toml in the directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print raw JSON responses instead of the board
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Loads the config file and applies the flags on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is invalid or the merged values
    /// fail validation.
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = GameConfig::load(self.config.as_deref(), &self.directory)?;
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(max_guesses) = self.max_guesses {
            config.max_guesses = max_guesses;
        }
        if let Some(min_lines) = self.min_lines {
            config.min_lines = min_lines;
        }
        if let Some(min_line_chars) = self.min_line_chars {
            config.min_line_chars = min_line_chars;
        }
        if let Some(include) = &self.include {
            config.include_pattern = Some(include.clone()).filter(|s| !s.trim().is_empty());
        }
        if let Some(ignore) = &self.ignore {
            config.ignore_pattern = Some(ignore.clone()).filter(|s| !s.trim().is_empty());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Plays on stdin and stdout.
///
/// # Errors
///
/// See [`play`].
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs games until the player quits or `input` ends.
///
/// # Errors
///
/// This function may return an error if:
/// * The config or either pattern is invalid
/// * `directory` is not a directory or has no eligible files
/// * Writing to `output` fails
pub fn play<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> Result<()> {
    let config = args.resolve_config()?;
    if !args.directory.is_dir() {
        bail!("Not a directory: {}", args.directory.display());
    }

    let options = config.scan_options();
    let files = scan_directory(&args.directory, &options)?;
    if files.is_empty() {
        return Err(GameError::NoEligibleFiles.into());
    }
    info!(count = files.len(), "Found eligible files");

    if args.list {
        for file in &files {
            writeln!(output, "{file}")?;
        }
        return Ok(());
    }

    let mut store = SessionStore::new(&args.directory);
    loop {
        let game = store.new_game(&options, config.session_settings())?;
        if args.json {
            write_json(output, &game)?;
        } else {
            write_round(output, &game.round, game.total_rounds)?;
        }

        let finished = play_game(args.json, &mut store, &game, input, output)?;
        store.remove(&game.game_id);
        if !finished {
            return Ok(());
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_command(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
    }
}

/// Returns `false` when the player left before the game ended.
fn play_game<R: BufRead, W: Write>(
    json: bool,
    store: &mut SessionStore,
    game: &NewGame,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = read_command(input)? else {
            return Ok(false);
        };

        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            return Ok(false);
        }
        if let Some(rest) = line.strip_prefix(":files") {
            write_files(output, &game.files, rest.trim())?;
            continue;
        }

        debug!(guess = %line, "Submitting guess");
        let response = store.guess(&game.game_id, &line)?;
        if json {
            write_json(output, &response)?;
        } else {
            write_response(output, &response, game.total_rounds)?;
        }
        if response.game_over {
            return Ok(true);
        }
    }
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<()> {
    writeln!(output, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

fn write_files<W: Write>(output: &mut W, files: &[String], filter: &str) -> Result<()> {
    let needle = filter.to_lowercase();
    let matches: Vec<&String> = files
        .iter()
        .filter(|file| file.to_lowercase().contains(&needle))
        .collect();
    for file in &matches {
        writeln!(output, "  {file}")?;
    }
    writeln!(output, "({} of {} files)", matches.len(), files.len())?;
    Ok(())
}

fn write_round<W: Write>(output: &mut W, round: &RoundPayload, total_rounds: usize) -> Result<()> {
    writeln!(
        output,
        "\nRound {}/{}  |  worth {} points  |  {} guesses left  |  {}",
        round.round_num,
        total_rounds,
        round.potential_score,
        round.guesses_remaining,
        round.language
    )?;
    for (idx, line) in round.code_display.split('\n').enumerate() {
        let marker = if idx == round.highlight_line { '>' } else { ' ' };
        writeln!(output, "{marker}{:>5} | {line}", idx + 1)?;
    }
    if !round.wrong_guesses.is_empty() {
        writeln!(output, "Wrong so far: {}", round.wrong_guesses.join(", "))?;
    }
    Ok(())
}

fn write_response<W: Write>(
    output: &mut W,
    response: &GuessResponse,
    total_rounds: usize,
) -> Result<()> {
    match &response.completed_round {
        Some(done) if done.correct => {
            writeln!(output, "Correct! +{} points", done.round_points)?;
        }
        Some(done) => {
            writeln!(output, "Out of guesses. It was {}", done.target_file)?;
        }
        None if response.game_over => writeln!(output, "The game is already over.")?,
        None => writeln!(output, "Wrong.")?,
    }

    if let Some(rounds) = &response.rounds {
        write_summary(output, rounds, response.total_score)?;
    } else if let Some(round) = &response.round {
        write_round(output, round, total_rounds)?;
    }
    Ok(())
}

fn write_summary<W: Write>(output: &mut W, rounds: &[RoundSummary], total: u32) -> Result<()> {
    writeln!(output, "\n{:<6} {:<6} {:>6}  File", "Round", "Result", "Points")?;
    for round in rounds {
        let result = if round.correct { "hit" } else { "miss" };
        writeln!(
            output,
            "{:<6} {:<6} {:>6}  {}",
            round.round_num, result, round.points, round.target_file
        )?;
    }
    writeln!(output, "Final score: {total}")?;
    Ok(())
}
