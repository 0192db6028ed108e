//! Letter frequency counter over the lowercase ASCII alphabet.

/// Remaining count per letter `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [u8; 26],
}

#[inline]
fn slot(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the letters of `bytes`. Anything outside `a..=z` is ignored.
    pub fn from_letters<I>(bytes: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut counts = Self::new();
        for b in bytes {
            counts.add(b);
        }
        counts
    }

    pub fn add(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.counts[i] = self.counts[i].saturating_add(1);
        }
    }

    /// Removes one occurrence of `letter`, returning `false` when none is left.
    pub fn take(&mut self, letter: u8) -> bool {
        match slot(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, letter: u8) -> usize {
        slot(letter).map_or(0, |i| self.counts[i] as usize)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// `true` if the pool can supply every character of `word`.
    pub fn can_spell(&self, word: &str) -> bool {
        let mut pool = *self;
        word.bytes().all(|b| pool.take(b))
    }

    /// `true` if `self` has at least as many of every letter as `other`.
    pub fn covers(&self, other: &LetterCounts) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Number of characters of `word` the pool can supply, each pool letter
    /// used at most once.
    pub fn matchable(&self, word: &str) -> usize {
        let mut pool = *self;
        word.bytes().filter(|&b| pool.take(b)).count()
    }
}
