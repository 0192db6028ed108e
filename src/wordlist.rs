//! Immutable vocabulary with a stable iteration order.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Reverse;

/// Acceptable words in load order, with a membership index and a
/// longest-first order computed once at construction.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: BTreeSet<String>,
    longest_first: Vec<usize>,
}

impl WordList {
    /// Build a list from words. Entries are trimmed, stripped of `"` and
    /// lowercased; blanks and repeats are dropped, first occurrence wins.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::default();
        for raw in words {
            let word: String = raw
                .as_ref()
                .trim()
                .chars()
                .filter(|&c| c != '"')
                .flat_map(char::to_lowercase)
                .collect();
            if word.is_empty() || list.index.contains(&word) {
                continue;
            }
            list.index.insert(word.clone());
            list.words.push(word);
        }
        let mut order: Vec<usize> = (0..list.words.len()).collect();
        // stable: equal lengths keep load order; length counts characters
        order.sort_by_key(|&i| Reverse(list.words[i].chars().count()));
        list.longest_first = order;
        list
    }

    /// Load a word list from a file holding one word per line.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let list = Self::from_words(text.lines());
        log::info!(
            "Loaded {} words from {}",
            list.len(),
            path.as_ref().display()
        );
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Words by descending length, load order among equal lengths.
    pub fn iter_longest_first(&self) -> impl Iterator<Item = &str> + '_ {
        self.longest_first.iter().map(move |&i| self.words[i].as_str())
    }
}
