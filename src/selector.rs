// Move selection for the automated player.
// Maps words onto board cells, scores them and scans the vocabulary.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::BoardState,
    common::{GameError, Move, Side},
    config::{Mask, NEUTRAL_POINTS, OPPOSING_POINTS, WINNING_POINTS},
    grid::Grid,
    legality::{is_legal, PlayedWords},
    letters::LetterCounts,
    ownership::{capturable_cells, Capturable},
    wordlist::WordList,
};

/// How the automated player picks among legal words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Highest score, longest words first, stopping once nothing left can win
    /// or beat the best score.
    #[default]
    Greedy,
    /// First legal word after ranking by how many letters the capturable
    /// cells can supply.
    HardFirstFit,
    /// First legal word in word-list order.
    FirstFit,
}

/// A word mapped onto the board with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub score: u32,
    pub indices: Vec<usize>,
    /// Capturing `indices` leaves no neutral cell.
    pub winning: bool,
}

/// Concatenate the cells of each group in turn, then every remaining cell.
/// The result is a permutation of all cell indices.
pub fn cell_order<const N: usize>(groups: &[Mask<N>]) -> Vec<usize> {
    let mut seen = Mask::<N>::new();
    let mut order = Vec::with_capacity(Grid::<N>::CELLS);
    for group in groups {
        for i in (*group - seen).iter() {
            order.push(i);
        }
        seen |= *group;
    }
    order.extend((!seen).iter());
    order
}

/// Pick, for each character of `word`, the first unused cell in `ordered`
/// holding that letter. `None` when some character has no such cell.
pub fn resolve_indices<const N: usize>(
    word: &str,
    grid: &Grid<N>,
    ordered: &[usize],
) -> Option<Vec<usize>> {
    let mut chosen = Mask::<N>::new();
    let mut indices = Vec::with_capacity(word.len());
    for ch in word.bytes() {
        let cell = ordered
            .iter()
            .copied()
            .find(|&i| !chosen.contains(i) && grid.letter(i) == Some(ch))?;
        chosen.insert(cell).ok()?;
        indices.push(cell);
    }
    Some(indices)
}

/// `true` if `word` has at least as many of every letter as the neutral
/// cells, so playing it takes every neutral cell.
pub fn is_winning_word<const N: usize>(
    word: &str,
    grid: &Grid<N>,
    capturable: &Capturable<N>,
) -> bool {
    let needed = grid.counts_of(capturable.neutral);
    LetterCounts::from_letters(word.bytes()).covers(&needed)
}

/// Score `word` for the acting player.
///
/// A winning word scores `WINNING_POINTS` and is mapped neutral cells first.
/// Any other word is mapped opposing cells first and earns
/// `OPPOSING_POINTS` per opposing cell and `NEUTRAL_POINTS` per neutral cell.
pub fn score_word<const N: usize>(
    word: &str,
    grid: &Grid<N>,
    capturable: &Capturable<N>,
) -> Option<ScoredWord> {
    if is_winning_word(word, grid, capturable) {
        let order = cell_order(&[capturable.neutral, capturable.opposing]);
        let indices = resolve_indices(word, grid, &order)?;
        return Some(ScoredWord {
            score: WINNING_POINTS,
            indices,
            winning: true,
        });
    }
    let order = cell_order(&[capturable.opposing, capturable.neutral]);
    let indices = resolve_indices(word, grid, &order)?;
    let score = indices
        .iter()
        .map(|&i| {
            if capturable.opposing.contains(i) {
                OPPOSING_POINTS
            } else if capturable.neutral.contains(i) {
                NEUTRAL_POINTS
            } else {
                0
            }
        })
        .sum();
    Some(ScoredWord {
        score,
        indices,
        winning: false,
    })
}

fn to_move(word: &str, scored: ScoredWord) -> Move {
    Move {
        word: String::from(word),
        indices: scored.indices,
    }
}

/// Choose a move for `acting` with the given strategy. The board is only
/// read; the caller applies the returned move.
pub fn select_move<const N: usize>(
    board: &BoardState<N>,
    played: &PlayedWords,
    words: &WordList,
    acting: Side,
    strategy: Strategy,
) -> Result<Move, GameError> {
    let capturable = capturable_cells(board, acting);
    match strategy {
        Strategy::Greedy => select_greedy(board.grid(), played, words, &capturable),
        Strategy::HardFirstFit => {
            let pool = board.grid().counts_of(capturable.all());
            let mut ranked: Vec<(usize, &str)> =
                words.iter().map(|w| (pool.matchable(w), w)).collect();
            // stable: ties keep word-list order
            ranked.sort_by(|a, b| b.0.cmp(&a.0));
            first_legal(
                ranked.into_iter().map(|(_, w)| w),
                board.grid(),
                played,
                words,
                &capturable,
            )
        }
        Strategy::FirstFit => first_legal(words.iter(), board.grid(), played, words, &capturable),
    }
}

fn select_greedy<const N: usize>(
    grid: &Grid<N>,
    played: &PlayedWords,
    words: &WordList,
    capturable: &Capturable<N>,
) -> Result<Move, GameError> {
    let neutral_count = capturable.neutral.count();
    let mut best: Option<(&str, ScoredWord)> = None;
    let mut best_score = 0u32;
    let mut candidates = 0usize;

    for word in words.iter_longest_first() {
        let len = word.chars().count();
        // Nothing shorter can take every neutral cell or beat the best score.
        if len < neutral_count && (len as u32) * OPPOSING_POINTS < best_score {
            break;
        }
        if !is_legal(word, grid, played, words) {
            continue;
        }
        let Some(scored) = score_word(word, grid, capturable) else {
            continue;
        };
        candidates += 1;
        if scored.winning {
            log::debug!("Winning word {} found after {} candidates", word, candidates);
            return Ok(to_move(word, scored));
        }
        if best.is_none() || scored.score > best_score {
            best_score = scored.score;
            best = Some((word, scored));
        }
    }

    log::debug!("Found {} word candidates", candidates);
    best.map(|(word, scored)| to_move(word, scored))
        .ok_or(GameError::NoLegalMoveFound)
}

fn first_legal<'w, const N: usize, I>(
    order: I,
    grid: &Grid<N>,
    played: &PlayedWords,
    words: &WordList,
    capturable: &Capturable<N>,
) -> Result<Move, GameError>
where
    I: IntoIterator<Item = &'w str>,
{
    order
        .into_iter()
        .filter(|w| is_legal(w, grid, played, words))
        .find_map(|w| score_word(w, grid, capturable).map(|scored| to_move(w, scored)))
        .ok_or(GameError::NoLegalMoveFound)
}
