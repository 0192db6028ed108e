//! Common types for Letterpress: sides, cell owners and errors.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bitboard::CellMaskError;

/// One of the two players. `Player1` is the human and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    /// The other player.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::Player1 => write!(f, "Player 1"),
            Side::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Ownership tag of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    Neutral,
    Owned(Side),
}

/// A word together with the cells chosen to spell it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub word: String,
    pub indices: Vec<usize>,
}

/// Reason a submitted word was refused. Recoverable: the submitter may retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// Word is already in the played history.
    AlreadyPlayed,
    /// Word is a strict prefix of a previously played word.
    PrefixOfPlayed { played: String },
    /// Word is shorter than the minimum length.
    TooShort,
    /// Grid letters cannot spell the word.
    Unspellable,
    /// Word is not in the vocabulary.
    NotInVocabulary,
    /// A submitted cell index does not exist on the grid.
    IndexOutOfRange { index: usize },
}

impl core::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IllegalMove::AlreadyPlayed => write!(f, "Word has already been played"),
            IllegalMove::PrefixOfPlayed { played } => {
                write!(f, "Word is part of previously played word {}", played)
            }
            IllegalMove::TooShort => write!(f, "Word is too short"),
            IllegalMove::Unspellable => write!(f, "Cannot make word with letters on the board"),
            IllegalMove::NotInVocabulary => write!(f, "This is not a valid word"),
            IllegalMove::IndexOutOfRange { index } => {
                write!(f, "You used a nonexistent letter (index {})", index)
            }
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The submitted move was refused.
    IllegalMove(IllegalMove),
    /// The automated player could not find any legal word.
    NoLegalMoveFound,
    /// A move was submitted after the game ended.
    GameOver,
    /// Grid was built from the wrong number of letters.
    InvalidGrid { expected: usize, found: usize },
    /// Grid letter is not a lowercase ASCII letter.
    InvalidLetter { index: usize, letter: char },
    /// The human player's input stream ended.
    InputClosed,
    /// Board generation gave up before finding a playable board.
    NoViableBoard { attempts: usize },
    /// Underlying cell mask error (e.g., grid too large for the mask).
    CellMask(CellMaskError),
}

impl From<IllegalMove> for GameError {
    fn from(err: IllegalMove) -> Self {
        GameError::IllegalMove(err)
    }
}

impl From<CellMaskError> for GameError {
    fn from(err: CellMaskError) -> Self {
        GameError::CellMask(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::IllegalMove(e) => write!(f, "Illegal move: {}", e),
            GameError::NoLegalMoveFound => write!(f, "No legal move found"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::InvalidGrid { expected, found } => {
                write!(f, "Grid needs {} letters, got {}", expected, found)
            }
            GameError::InvalidLetter { index, letter } => {
                write!(f, "Invalid letter {:?} at index {}", letter, index)
            }
            GameError::InputClosed => write!(f, "Input closed"),
            GameError::NoViableBoard { attempts } => {
                write!(f, "No playable board after {} attempts", attempts)
            }
            GameError::CellMask(e) => write!(f, "CellMask error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IllegalMove {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
