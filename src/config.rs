use crate::bitboard::CellMask;

/// Side length of the grid used by the binary.
pub const BOARD_SIZE: usize = 5;

/// Cell set type for an N×N grid. `u64` storage supports grids up to 8×8.
pub type Mask<const N: usize> = CellMask<u64, N>;

/// Shortest word that may be played.
pub const MIN_WORD_LEN: usize = 2;

/// Score given to a word that would leave no neutral cell.
pub const WINNING_POINTS: u32 = 100;
/// Score per neutral cell captured.
pub const NEUTRAL_POINTS: u32 = 1;
/// Score per opposing cell captured.
pub const OPPOSING_POINTS: u32 = 2;

pub const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];
pub const HARD_LETTERS: [u8; 5] = [b'j', b'q', b'v', b'x', b'z'];
pub const MIN_VOWELS: usize = 5;
pub const MAX_SAME_LETTER: usize = 3;
pub const MAX_SAME_HARD_LETTER: usize = 2;
/// Give up generating after this many rejected boards.
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "LETTERPRESS_LOG";
