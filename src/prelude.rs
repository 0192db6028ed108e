//! Commonly used types and utilities for ease of import.

pub use crate::{
    capturable_cells, capture, check_word, generate_grid, is_legal, resolve_indices, run_game,
    select_move, AiPlayer, BoardState, GameEngine, GameError, Grid, IllegalMove, Move, Player,
    Side, Strategy, TurnState, WordList,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, CliPlayer};
