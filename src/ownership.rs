//! Which cells a player may take this turn, and taking them.
//!
//! Cells fall into five groups from the acting player's point of view:
//! neutral, own, own locked, opposing, opposing locked. Only neutral and
//! unlocked opposing cells can be captured.

use crate::board::BoardState;
use crate::common::Side;
use crate::config::Mask;

/// Cells the acting player may capture, split by origin. The two sets are
/// disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capturable<const N: usize> {
    pub neutral: Mask<N>,
    pub opposing: Mask<N>,
}

impl<const N: usize> Capturable<N> {
    /// Union of both groups.
    pub fn all(&self) -> Mask<N> {
        self.neutral | self.opposing
    }

    pub fn contains(&self, index: usize) -> bool {
        self.neutral.contains(index) || self.opposing.contains(index)
    }
}

/// Compute the capturable cells for `acting` from the current ownership.
pub fn capturable_cells<const N: usize>(board: &BoardState<N>, acting: Side) -> Capturable<N> {
    let other = acting.opponent();
    Capturable {
        neutral: board.neutral(),
        opposing: board.owned_by(other) - board.locked(other),
    }
}

/// Give every capturable cell among `indices` to `acting`.
///
/// The capturable set is computed once, before any cell changes hands, so
/// a capture in this call cannot lock or unlock another cell of the same
/// call. Indices that are not capturable are ignored. Returns the cells that
/// actually changed owner.
pub fn capture<const N: usize>(
    board: &mut BoardState<N>,
    acting: Side,
    indices: &[usize],
) -> Mask<N> {
    let capturable = capturable_cells(board, acting);
    let mut taken = Mask::<N>::new();
    for &i in indices {
        if capturable.contains(i) && !taken.contains(i) {
            board.assign(i, acting);
            let _ = taken.insert(i);
        } else if !capturable.contains(i) {
            log::debug!("{} cannot capture cell {}, ignoring", acting, i);
        }
    }
    taken
}
