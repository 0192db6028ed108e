#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::{
    common::{GameError, IllegalMove, Move, Side},
    game::GameEngine,
    grid::Grid,
    player::Player,
    ui::render_board,
    wordlist::WordList,
};

/// Problems with a line typed by the human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    OutOfRange { index: usize, cells: usize },
    Repeated(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Enter at least one index"),
            InputError::NotANumber(s) => write!(f, "{:?} is not a cell index", s),
            InputError::OutOfRange { index, cells } => {
                write!(f, "You used a nonexistent letter ({} >= {})", index, cells)
            }
            InputError::Repeated(i) => write!(f, "Cell {} used more than once", i),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse whitespace-separated cell indices for a grid of `cells` cells.
pub fn parse_indices(line: &str, cells: usize) -> Result<Vec<usize>, InputError> {
    let mut indices = Vec::new();
    for token in line.split_whitespace() {
        let index: usize = token
            .parse()
            .map_err(|_| InputError::NotANumber(String::from(token)))?;
        if index >= cells {
            return Err(InputError::OutOfRange { index, cells });
        }
        if indices.contains(&index) {
            return Err(InputError::Repeated(index));
        }
        indices.push(index);
    }
    if indices.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(indices)
}

/// Human player reading cell indices line by line.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: fmt::Arguments<'_>) {
        // a broken terminal is not a reason to abort the game
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<const N: usize, R: BufRead, W: Write> Player<N> for CliPlayer<R, W> {
    fn select_move(
        &mut self,
        engine: &GameEngine<N>,
        _words: &WordList,
        _side: Side,
    ) -> Result<Vec<usize>, GameError> {
        self.say(format_args!("{}", render_board(engine.board())));
        loop {
            let _ = write!(self.output, "\nEnter the indices of your word: ");
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(GameError::InputClosed),
                Ok(_) => {}
            }
            match parse_indices(&line, Grid::<N>::CELLS) {
                Ok(indices) => return Ok(indices),
                Err(e) => self.say(format_args!("{}", e)),
            }
        }
    }

    fn retries_on_rejection(&self) -> bool {
        true
    }

    fn handle_rejection(&mut self, reason: &IllegalMove) {
        self.say(format_args!("{}", reason));
    }

    fn handle_move(&mut self, side: Side, mv: &Move) {
        match side {
            Side::Player1 => self.say(format_args!("Player 1 has played {}", mv.word)),
            Side::Player2 => self.say(format_args!("Computer has played {}", mv.word)),
        }
    }
}
