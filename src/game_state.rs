//! The hidden state of an evil hangman game.
//!
//! Instead of fixing a secret word up front, [`GameState`] keeps every word
//! still consistent with the guesses so far. Each guess partitions those words
//! by the pattern they would reveal and keeps the largest group.

use crate::error::{HangmanError, Result};
use crate::partition::{Partition, partition, select_largest};
use crate::pattern::Pattern;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;

/// The current pattern together with the words consistent with it.
///
/// Only ever replaced as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Live {
    pattern: Pattern,
    words: BTreeSet<String>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    live: Live,
    guessed: BTreeSet<char>,
    guesses_left: usize,
}

impl GameState {
    /// Start a game over the words of `dictionary` that are exactly `length`
    /// characters long, allowing `max_guesses` wrong guesses.
    ///
    /// Duplicate words collapse into one. A dictionary with no word of the
    /// requested length is accepted and yields an empty candidate set.
    ///
    /// # Errors
    /// [`HangmanError::InvalidConfiguration`] if `length` is 0 or
    /// `max_guesses` is negative.
    pub fn new<I, S>(dictionary: I, length: usize, max_guesses: i32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let invalid = HangmanError::InvalidConfiguration {
            length,
            max_guesses,
        };
        if length < 1 {
            return Err(invalid);
        }
        let guesses_left = usize::try_from(max_guesses).map_err(|_| invalid)?;

        let words: BTreeSet<String> = dictionary
            .into_iter()
            .filter(|w| w.as_ref().chars().count() == length)
            .map(|w| w.as_ref().to_string())
            .collect();
        info_log!(
            "new game: {} candidate words of length {}, {} guesses",
            words.len(),
            length,
            guesses_left
        );

        Ok(Self {
            live: Live {
                pattern: Pattern::blank(length),
                words,
            },
            guessed: BTreeSet::new(),
            guesses_left,
        })
    }

    /// Words that could still be the answer, in lexicographic order.
    #[must_use]
    pub fn candidate_words(&self) -> &BTreeSet<String> {
        &self.live.words
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.guesses_left
    }

    /// Letters guessed so far, in sorted order.
    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// # Errors
    /// [`HangmanError::EmptyCandidateSet`] when no word can be the answer.
    pub fn current_pattern(&self) -> Result<&Pattern> {
        if self.live.words.is_empty() {
            return Err(HangmanError::EmptyCandidateSet);
        }
        Ok(&self.live.pattern)
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.live.pattern.len()
    }

    /// True once the pattern is fully revealed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.live.words.is_empty() && self.live.pattern.is_complete()
    }

    /// True when no further guess can be accepted or needed.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.guesses_left == 0 || self.live.words.is_empty()
    }

    /// How the candidates would split if `letter` were guessed now.
    ///
    /// Does not change the game.
    #[must_use]
    pub fn preview(&self, letter: char) -> Partition {
        partition(&self.live.words, &self.live.pattern, letter)
    }

    /// Record a guess and return how many times `letter` appears in the new
    /// pattern. A guess that reveals nothing costs one from the budget.
    ///
    /// # Errors
    /// - [`HangmanError::NoGuessesLeft`] if the budget is spent.
    /// - [`HangmanError::EmptyCandidateSet`] if no candidate word remains.
    /// - [`HangmanError::DuplicateGuess`] if `letter` was guessed before.
    ///
    /// Checked in that order; on error nothing changes.
    pub fn guess(&mut self, letter: char) -> Result<usize> {
        if self.guesses_left == 0 {
            return Err(HangmanError::NoGuessesLeft);
        }
        if self.live.words.is_empty() {
            return Err(HangmanError::EmptyCandidateSet);
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::DuplicateGuess(letter));
        }

        let (pattern, words) =
            select_largest(self.preview(letter)).ok_or(HangmanError::EmptyCandidateSet)?;
        self.guessed.insert(letter);
        self.live = Live { pattern, words };

        let occurrences = self.live.pattern.occurrences(letter);
        if occurrences == 0 {
            self.guesses_left -= 1;
        }
        debug_log!("kept {} words after '{}'", self.live.words.len(), letter);
        info_log!(
            "guess '{}': pattern {}, {} occurrence(s), {} guesses left",
            letter,
            self.live.pattern,
            occurrences,
            self.guesses_left
        );
        Ok(occurrences)
    }
}
