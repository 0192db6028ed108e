//! Random board generation by rejection sampling.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::{
    common::GameError,
    config::{
        HARD_LETTERS, MAX_GENERATION_ATTEMPTS, MAX_SAME_HARD_LETTER, MAX_SAME_LETTER, MIN_VOWELS,
        VOWELS,
    },
    grid::Grid,
    letters::LetterCounts,
};

/// Why a candidate board was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooFewVowels { found: usize },
    TooManySameLetter { letter: char, count: usize },
    QWithoutU,
    TooManyHardLetter { letter: char, count: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooFewVowels { found } => write!(f, "minimum vowels ({} found)", found),
            Rejection::TooManySameLetter { letter, count } => {
                write!(f, "maximum same letter of {} ({} found)", letter, count)
            }
            Rejection::QWithoutU => write!(f, "Q without a U"),
            Rejection::TooManyHardLetter { letter, count } => write!(
                f,
                "too many of the same hard letter of {} ({} found)",
                letter, count
            ),
        }
    }
}

/// Check the playability rules for a set of board letters.
pub fn check_viability(letters: &[u8]) -> Result<(), Rejection> {
    let counts = LetterCounts::from_letters(letters.iter().copied());

    let vowels: usize = VOWELS.iter().map(|&v| counts.get(v)).sum();
    if vowels < MIN_VOWELS {
        return Err(Rejection::TooFewVowels { found: vowels });
    }

    if let Some((letter, count)) = (b'a'..=b'z')
        .map(|l| (l, counts.get(l)))
        // reversed so the alphabetically first letter wins a tie
        .rev()
        .max_by_key(|&(_, c)| c)
        .filter(|&(_, c)| c > MAX_SAME_LETTER)
    {
        return Err(Rejection::TooManySameLetter {
            letter: char::from(letter),
            count,
        });
    }

    if counts.get(b'q') > 0 && counts.get(b'u') == 0 {
        return Err(Rejection::QWithoutU);
    }

    for &hard in HARD_LETTERS.iter() {
        let count = counts.get(hard);
        if count > MAX_SAME_HARD_LETTER {
            return Err(Rejection::TooManyHardLetter {
                letter: char::from(hard),
                count,
            });
        }
    }

    Ok(())
}

/// Draw uniform random letters until the board passes `check_viability`.
pub fn generate_grid<const N: usize, R: Rng + ?Sized>(rng: &mut R) -> Result<Grid<N>, GameError> {
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let letters: Vec<u8> = (0..Grid::<N>::CELLS)
            .map(|_| b'a' + rng.random_range(0..26u8))
            .collect();
        match check_viability(&letters) {
            Ok(()) => {
                log::debug!("Accepted board after {} attempts", attempt);
                return Grid::new(letters.into_iter().map(char::from));
            }
            Err(reason) => log::debug!("Trying again - {}", reason),
        }
    }
    Err(GameError::NoViableBoard {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
