//! Plain-text board rendering.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::{
    board::BoardState,
    common::{Owner, Side},
};

fn cell_label<const N: usize>(board: &BoardState<N>, index: usize) -> String {
    let letter = board
        .grid()
        .letter(index)
        .map_or('?', |b| char::from(b).to_ascii_uppercase());
    match board.owner(index) {
        Owner::Neutral => format!("{}", letter),
        Owner::Owned(side) => {
            let tag = match side {
                Side::Player1 => '1',
                Side::Player2 => '2',
            };
            let lock = if board.is_locked(index) { "*" } else { "" };
            format!("{}{}{}", letter, tag, lock)
        }
    }
}

/// Render the board row by row. Each row is preceded by the indices of its
/// cells; owned letters carry the owner's number and locked ones a `*`.
pub fn render_board<const N: usize>(board: &BoardState<N>) -> String {
    let mut out = String::new();
    for r in 0..N {
        out.push('\n');
        for c in 0..N {
            let _ = write!(out, "{:<5}", r * N + c);
        }
        out.push('\n');
        for c in 0..N {
            let _ = write!(out, "{:<5}", cell_label(board, r * N + c));
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "\nPlayer 1: {}  Player 2: {}",
        board.score(Side::Player1),
        board.score(Side::Player2)
    );
    out
}

/// Print the board to stdout.
#[cfg(feature = "std")]
pub fn print_board<const N: usize>(board: &BoardState<N>) {
    std::println!("{}", render_board(board));
}
