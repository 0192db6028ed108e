use alloc::vec::Vec;

use crate::{
    common::{GameError, IllegalMove, Move, Side},
    game::GameEngine,
    wordlist::WordList,
};

/// Interface implemented by different player types.
pub trait Player<const N: usize> {
    /// Choose the cells to play for `side` given the current game.
    fn select_move(
        &mut self,
        engine: &GameEngine<N>,
        words: &WordList,
        side: Side,
    ) -> Result<Vec<usize>, GameError>;

    /// Whether a refused submission should be followed by another attempt.
    fn retries_on_rejection(&self) -> bool {
        false
    }

    /// Inform the player that its last submission was refused.
    fn handle_rejection(&mut self, _reason: &IllegalMove) {}

    /// Inform the player of a move that was played, by either side.
    fn handle_move(&mut self, _side: Side, _mv: &Move) {}
}

/// Ask `player` for a move and apply it. Refused submissions are reported
/// back to the player, which is asked again if it accepts retries.
pub fn play_turn<const N: usize, P>(
    engine: &mut GameEngine<N>,
    player: &mut P,
    words: &WordList,
) -> Result<Move, GameError>
where
    P: Player<N> + ?Sized,
{
    let side = engine.to_move().ok_or(GameError::GameOver)?;
    loop {
        let indices = player.select_move(engine, words, side)?;
        match engine.play(&indices, words) {
            Ok(mv) => {
                player.handle_move(side, &mv);
                return Ok(mv);
            }
            Err(GameError::IllegalMove(reason)) if player.retries_on_rejection() => {
                player.handle_rejection(&reason);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Alternate turns until the board is full and return the winner.
pub fn run_game<const N: usize>(
    engine: &mut GameEngine<N>,
    player1: &mut dyn Player<N>,
    player2: &mut dyn Player<N>,
    words: &WordList,
) -> Result<Side, GameError> {
    while let Some(side) = engine.to_move() {
        let mv = match side {
            Side::Player1 => play_turn(engine, player1, words)?,
            Side::Player2 => play_turn(engine, player2, words)?,
        };
        match side {
            Side::Player1 => player2.handle_move(side, &mv),
            Side::Player2 => player1.handle_move(side, &mv),
        }
    }
    engine.winner().ok_or(GameError::GameOver)
}
