use crate::error::HangmanError;
use crate::game_state::GameState;
use clap::Parser;
use std::io::{self, Write};

/// Replay a sequence of guesses against an evil hangman game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Length of the secret word
    #[arg(short = 'l', long = "length")]
    pub length: usize,

    /// Number of wrong guesses allowed
    #[arg(
        short = 'm',
        long = "max-guesses",
        default_value_t = 8,
        allow_negative_numbers = true
    )]
    pub max_guesses: i32,

    /// Letters to guess, in order (whitespace is ignored)
    #[arg(short = 'g', long = "guesses", default_value = "")]
    pub guesses: String,

    /// Print how the candidates split before each guess
    #[arg(long = "explain")]
    pub explain: bool,

    /// Increase log output (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The dictionary, one word per argument
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    /// Build the game described by these options.
    ///
    /// # Errors
    /// [`HangmanError::InvalidConfiguration`] for a zero length or a negative
    /// guess budget.
    pub fn new_game(&self) -> Result<GameState, HangmanError> {
        GameState::new(&self.words, self.length, self.max_guesses)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guesses.chars().filter(|c| !c.is_whitespace())
    }
}

fn pattern_text(state: &GameState) -> String {
    state
        .current_pattern()
        .map_or_else(|_| "?".to_string(), ToString::to_string)
}

fn display_partition<W: Write>(state: &GameState, letter: char, out: &mut W) -> io::Result<()> {
    writeln!(out, "groups for '{letter}':")?;
    for (pattern, words) in state.preview(letter) {
        writeln!(out, "  {pattern} ({})", words.len())?;
    }
    Ok(())
}

fn display_guess<W: Write>(
    state: &GameState,
    letter: char,
    count: usize,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "guess '{letter}': {count} occurrence(s), pattern {}, {} guesses left, {} candidates",
        pattern_text(state),
        state.guesses_remaining(),
        state.candidate_words().len()
    )
}

pub fn display_summary<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    let guessed: String = state.guessed_letters().iter().collect();
    if state.candidate_words().is_empty() {
        writeln!(out, "No candidate words of length {}.", state.word_length())
    } else if state.is_solved() {
        writeln!(out, "Solved: {} (guessed: {guessed})", pattern_text(state))
    } else if state.guesses_remaining() == 0 {
        let word = state.candidate_words().iter().next().map_or("", String::as_str);
        writeln!(out, "Out of guesses. The word was {word}.")
    } else {
        writeln!(
            out,
            "In progress: {} with {} candidates, {} guesses left (guessed: {guessed})",
            pattern_text(state),
            state.candidate_words().len(),
            state.guesses_remaining()
        )
    }
}

/// Play `letters` in order against `state`, reporting each result to `out`.
///
/// Repeated letters are reported and skipped. Play stops once the game is
/// over; any letters left are ignored.
pub fn replay<W, I>(
    state: &mut GameState,
    letters: I,
    explain: bool,
    out: &mut W,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = char>,
{
    for letter in letters {
        if state.is_over() {
            break;
        }
        if explain {
            display_partition(state, letter, out)?;
        }
        match state.guess(letter) {
            Ok(count) => display_guess(state, letter, count, out)?,
            Err(e @ HangmanError::DuplicateGuess(_)) => writeln!(out, "guess '{letter}': {e}")?,
            Err(e) => {
                writeln!(out, "guess '{letter}': {e}")?;
                break;
            }
        }
    }
    display_summary(state, out)
}
