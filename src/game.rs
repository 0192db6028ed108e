use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::BoardState,
    common::{GameError, IllegalMove, Move, Owner, Side},
    config::Mask,
    grid::Grid,
    legality::{check_word, PlayedWords},
    ownership::{capturable_cells, capture, Capturable},
    selector::{score_word, select_move, Strategy},
    wordlist::WordList,
};

/// Whose move it is, or that the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    AwaitingPlayer1,
    AwaitingPlayer2,
    GameOver,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Serializable projection of the whole game, used for logging and the
/// simulation output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub letters: String,
    pub owners: Vec<Owner>,
    pub locked: Vec<bool>,
    pub played_words: PlayedWords,
    pub turn: TurnState,
    pub player1_score: usize,
    pub player2_score: usize,
}

/// Core game logic holding the board, word history and turn.
pub struct GameEngine<const N: usize> {
    board: BoardState<N>,
    played: PlayedWords,
    turn: TurnState,
}

impl<const N: usize> GameEngine<N> {
    /// Start a game on `grid` with every cell neutral and Player 1 to move.
    pub fn new(grid: Grid<N>) -> Self {
        Self {
            board: BoardState::new(grid),
            played: PlayedWords::new(),
            turn: TurnState::AwaitingPlayer1,
        }
    }

    pub fn board(&self) -> &BoardState<N> {
        &self.board
    }

    pub fn grid(&self) -> &Grid<N> {
        self.board.grid()
    }

    pub fn played_words(&self) -> &PlayedWords {
        &self.played
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The side to move, `None` once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        match self.turn {
            TurnState::AwaitingPlayer1 => Some(Side::Player1),
            TurnState::AwaitingPlayer2 => Some(Side::Player2),
            TurnState::GameOver => None,
        }
    }

    /// Cells `side` could capture right now.
    pub fn capturable(&self, side: Side) -> Capturable<N> {
        capturable_cells(&self.board, side)
    }

    /// Check `word` against the history, grid and vocabulary.
    pub fn check_word(&self, word: &str, words: &WordList) -> Result<(), IllegalMove> {
        check_word(word, self.board.grid(), &self.played, words)
    }

    pub fn is_legal(&self, word: &str, words: &WordList) -> bool {
        self.check_word(word, words).is_ok()
    }

    /// Play the word spelled by `indices` for the side to move.
    ///
    /// Every index must exist on the grid and the spelled word must be legal.
    /// Indices that are not capturable are accepted but change nothing.
    pub fn play(&mut self, indices: &[usize], words: &WordList) -> Result<Move, GameError> {
        let side = self.to_move().ok_or(GameError::GameOver)?;
        if let Some(&index) = indices.iter().find(|&&i| i >= Grid::<N>::CELLS) {
            return Err(IllegalMove::IndexOutOfRange { index }.into());
        }
        let word = self.board.grid().spell(indices);
        self.check_word(&word, words)?;
        let taken = capture(&mut self.board, side, indices);
        log::info!("{} has played {}", side, word);
        self.finish_turn(side, word.clone(), taken);
        Ok(Move {
            word,
            indices: Vec::from(indices),
        })
    }

    /// Play `word` for the side to move, choosing cells opposing-first the
    /// way the automated player scores.
    pub fn play_word(&mut self, word: &str, words: &WordList) -> Result<Move, GameError> {
        let side = self.to_move().ok_or(GameError::GameOver)?;
        self.check_word(word, words)?;
        let scored = score_word(word, self.board.grid(), &self.capturable(side))
            .ok_or(GameError::IllegalMove(IllegalMove::Unspellable))?;
        self.play(&scored.indices, words)
    }

    /// Let the automated player choose and play a move for the side to move.
    pub fn play_automated(
        &mut self,
        words: &WordList,
        strategy: Strategy,
    ) -> Result<Move, GameError> {
        let side = self.to_move().ok_or(GameError::GameOver)?;
        let mv = select_move(&self.board, &self.played, words, side, strategy)?;
        self.play(&mv.indices, words)
    }

    fn finish_turn(&mut self, side: Side, word: String, taken: Mask<N>) {
        log::debug!("{} captured {} cells", side, taken.count());
        self.played.push(word);
        self.turn = if self.board.is_full() {
            log::info!(
                "Game over: {} to {}",
                self.board.score(Side::Player1),
                self.board.score(Side::Player2)
            );
            TurnState::GameOver
        } else {
            match side {
                Side::Player1 => TurnState::AwaitingPlayer2,
                Side::Player2 => TurnState::AwaitingPlayer1,
            }
        };
    }

    /// Cells owned by each player, as `(player1, player2)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.score(Side::Player1),
            self.board.score(Side::Player2),
        )
    }

    /// Winner once the board is full. Player 1 needs strictly more cells;
    /// a tie goes to Player 2.
    pub fn winner(&self) -> Option<Side> {
        if self.turn != TurnState::GameOver {
            return None;
        }
        let (p1, p2) = self.score();
        if p1 > p2 {
            Some(Side::Player1)
        } else {
            Some(Side::Player2)
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(side) => GameStatus::Won(side),
            None => GameStatus::InProgress,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let (player1_score, player2_score) = self.score();
        GameSnapshot {
            letters: self.board.grid().spell(&(0..Grid::<N>::CELLS).collect::<Vec<_>>()),
            owners: self.board.owners(),
            locked: (0..Grid::<N>::CELLS)
                .map(|i| self.board.is_locked(i))
                .collect(),
            played_words: self.played.clone(),
            turn: self.turn,
            player1_score,
            player2_score,
        }
    }
}
