use std::collections::BTreeSet;
use std::fmt;

/// Rendering of an unrevealed position.
pub const PLACEHOLDER: char = '-';

/// What the player currently knows about the secret word.
///
/// Each slot is either `None` (unrevealed) or `Some(letter)`. The derived
/// ordering compares slot by slot with `None` ordering before every letter,
/// so among patterns of one length `"---"` < `"-a-"` < `"a--"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// A pattern of `length` unrevealed positions.
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of positions showing `letter`.
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.slots.iter().filter(|&&s| s == Some(letter)).count()
    }

    /// True once every position has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The pattern `word` would produce if `letter` were guessed now.
    ///
    /// Positions where `word` has `letter` are revealed; every other position
    /// keeps whatever this pattern already shows there.
    #[must_use]
    pub fn reveal(&self, word: &str, letter: char) -> Self {
        let slots = self
            .slots
            .iter()
            .zip(word.chars())
            .map(|(&slot, c)| if c == letter { Some(c) } else { slot })
            .collect();
        Self { slots }
    }

    /// Whether `word` is still a possible answer under this pattern.
    ///
    /// Every revealed position must hold the same letter in `word`, and no
    /// unrevealed position may hold a letter from `guessed`.
    #[must_use]
    pub fn matches(&self, word: &str, guessed: &BTreeSet<char>) -> bool {
        if word.chars().count() != self.slots.len() {
            return false;
        }
        self.slots.iter().zip(word.chars()).all(|(slot, c)| match slot {
            Some(revealed) => *revealed == c,
            None => !guessed.contains(&c),
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}
