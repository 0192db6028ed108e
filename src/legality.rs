//! Word legality: history, length, spellability and vocabulary checks.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::IllegalMove;
use crate::config::MIN_WORD_LEN;
use crate::grid::Grid;
use crate::wordlist::WordList;

/// Words accepted so far, in turn order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayedWords {
    words: Vec<String>,
}

impl PlayedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// A previously played word that has `word` as a strict prefix.
    pub fn extension_of(&self, word: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| w.len() > word.len() && w.starts_with(word))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn push(&mut self, word: String) {
        self.words.push(word);
    }
}

/// Run every check in order and report the first failure.
pub fn check_word<const N: usize>(
    word: &str,
    grid: &Grid<N>,
    played: &PlayedWords,
    words: &WordList,
) -> Result<(), IllegalMove> {
    if played.contains(word) {
        return Err(IllegalMove::AlreadyPlayed);
    }
    if let Some(longer) = played.extension_of(word) {
        return Err(IllegalMove::PrefixOfPlayed {
            played: String::from(longer),
        });
    }
    if word.chars().count() < MIN_WORD_LEN {
        return Err(IllegalMove::TooShort);
    }
    if !grid.letter_counts().can_spell(word) {
        return Err(IllegalMove::Unspellable);
    }
    if !words.contains(word) {
        return Err(IllegalMove::NotInVocabulary);
    }
    Ok(())
}

/// `true` when `word` may be played now.
pub fn is_legal<const N: usize>(
    word: &str,
    grid: &Grid<N>,
    played: &PlayedWords,
    words: &WordList,
) -> bool {
    check_word(word, grid, played, words).is_ok()
}
