//! The immutable letter grid and its adjacency.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::Mask;
use crate::letters::LetterCounts;

/// N×N lowercase letters, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    letters: Vec<u8>,
    counts: LetterCounts,
}

impl<const N: usize> Grid<N> {
    /// Number of cells.
    pub const CELLS: usize = N * N;

    /// Build a grid from exactly `N*N` lowercase ASCII letters.
    pub fn new<I>(letters: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = char>,
    {
        Mask::<N>::try_new()?;
        let mut bytes = Vec::with_capacity(Self::CELLS);
        for (index, letter) in letters.into_iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(GameError::InvalidLetter { index, letter });
            }
            bytes.push(letter as u8);
        }
        if bytes.len() != Self::CELLS {
            return Err(GameError::InvalidGrid {
                expected: Self::CELLS,
                found: bytes.len(),
            });
        }
        let counts = LetterCounts::from_letters(bytes.iter().copied());
        Ok(Self {
            letters: bytes,
            counts,
        })
    }

    /// Convenience constructor from a string such as `"catogruqe"`.
    pub fn from_str_letters(s: &str) -> Result<Self, GameError> {
        Self::new(s.chars())
    }

    /// Letter at `index`, or `None` when out of range.
    pub fn letter(&self, index: usize) -> Option<u8> {
        self.letters.get(index).copied()
    }

    /// Letters in row-major order.
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Multiset of all letters on the grid.
    pub fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Multiset of the letters under `cells`.
    pub fn counts_of(&self, cells: Mask<N>) -> LetterCounts {
        LetterCounts::from_letters(cells.iter().map(|i| self.letters[i]))
    }

    /// Word spelled by visiting `indices` in order. Out-of-range indices are skipped.
    pub fn spell(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter_map(|&i| self.letter(i))
            .map(char::from)
            .collect()
    }

    /// Up, down, left and right neighbours of `index` that lie on the grid.
    pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
        let row = index / N;
        let col = index % N;
        let up = (index < N * N && row > 0).then(|| index - N);
        let down = (index < N * N && row + 1 < N).then(|| index + N);
        let left = (index < N * N && col > 0).then(|| index - 1);
        let right = (index < N * N && col + 1 < N).then(|| index + 1);
        [up, down, left, right].into_iter().flatten()
    }

    /// Neighbours of `index` as a mask.
    pub fn neighbor_mask(index: usize) -> Mask<N> {
        let mut mask = Mask::<N>::new();
        for n in Self::neighbors(index) {
            // neighbours are always in range
            let _ = mask.insert(n);
        }
        mask
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters.iter().map(|&b| char::from(b)).collect();
        f.debug_struct("Grid").field("n", &N).field("letters", &letters).finish()
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &b) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}
