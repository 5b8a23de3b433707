// Library interface for evil-hangman
// The binary and integration tests both build on these modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod partition;
pub mod pattern;

pub use error::{HangmanError, Result};
pub use game_state::GameState;
pub use partition::{Partition, induced_pattern, partition, select_largest};
pub use pattern::{PLACEHOLDER, Pattern};
