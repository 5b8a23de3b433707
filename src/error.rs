use thiserror::Error;

/// Errors reported by [`GameState`](crate::game_state::GameState).
///
/// Every error is detected before any state is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    #[error("invalid configuration: length {length} must be at least 1 and max guesses {max_guesses} must not be negative")]
    InvalidConfiguration { length: usize, max_guesses: i32 },
    #[error("no candidate words remain")]
    EmptyCandidateSet,
    #[error("no guesses left")]
    NoGuessesLeft,
    #[error("letter '{0}' has already been guessed")]
    DuplicateGuess(char),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
