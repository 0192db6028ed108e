//! Board state: the letter grid and per-cell ownership.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Owner, Side};
use crate::config::Mask;
use crate::grid::Grid;

/// Grid plus the cells owned by each player. A cell is in at most one of
/// the two masks; cells in neither are neutral.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardState<const N: usize> {
    grid: Grid<N>,
    player1: Mask<N>,
    player2: Mask<N>,
}

impl<const N: usize> BoardState<N> {
    /// Fresh board with every cell neutral.
    pub fn new(grid: Grid<N>) -> Self {
        Self {
            grid,
            player1: Mask::<N>::new(),
            player2: Mask::<N>::new(),
        }
    }

    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    /// Cells owned by `side`.
    pub fn owned_by(&self, side: Side) -> Mask<N> {
        match side {
            Side::Player1 => self.player1,
            Side::Player2 => self.player2,
        }
    }

    /// Cells nobody owns.
    pub fn neutral(&self) -> Mask<N> {
        !(self.player1 | self.player2)
    }

    /// Owner of `index`. Out-of-range indices report `Neutral`.
    pub fn owner(&self, index: usize) -> Owner {
        if self.player1.contains(index) {
            Owner::Owned(Side::Player1)
        } else if self.player2.contains(index) {
            Owner::Owned(Side::Player2)
        } else {
            Owner::Neutral
        }
    }

    /// Owners of every cell in index order.
    pub fn owners(&self) -> Vec<Owner> {
        (0..Grid::<N>::CELLS).map(|i| self.owner(i)).collect()
    }

    /// A cell is locked when its owner also owns every neighbour.
    pub fn is_locked(&self, index: usize) -> bool {
        match self.owner(index) {
            Owner::Neutral => false,
            Owner::Owned(side) => Grid::<N>::neighbor_mask(index).is_subset(&self.owned_by(side)),
        }
    }

    /// Locked cells of `side`, recomputed on every call.
    pub fn locked(&self, side: Side) -> Mask<N> {
        let owned = self.owned_by(side);
        let mut locked = Mask::<N>::new();
        for i in owned.iter().filter(|&i| Grid::<N>::neighbor_mask(i).is_subset(&owned)) {
            let _ = locked.insert(i);
        }
        locked
    }

    /// Number of cells owned by `side`.
    pub fn score(&self, side: Side) -> usize {
        self.owned_by(side).count()
    }

    /// `true` once no neutral cell remains.
    pub fn is_full(&self) -> bool {
        (self.player1 | self.player2).is_full()
    }

    /// Hand `index` to `side`, taking it from the opponent if needed.
    /// Callers are responsible for capturability; see `ownership::capture`.
    pub(crate) fn assign(&mut self, index: usize, side: Side) {
        let (mine, theirs) = match side {
            Side::Player1 => (&mut self.player1, &mut self.player2),
            Side::Player2 => (&mut self.player2, &mut self.player1),
        };
        if mine.insert(index).is_ok() {
            let _ = theirs.remove(index);
        }
    }
}

impl<const N: usize> fmt::Debug for BoardState<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardState")
            .field("grid", &self.grid)
            .field("player1", &self.player1)
            .field("player2", &self.player2)
            .finish()
    }
}
