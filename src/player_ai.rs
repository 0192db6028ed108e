use alloc::vec::Vec;

use crate::{
    common::{GameError, Side},
    game::GameEngine,
    player::Player,
    selector::{select_move, Strategy},
    wordlist::WordList,
};

/// Automated player that scans the vocabulary with a fixed strategy.
pub struct AiPlayer {
    strategy: Strategy,
}

impl AiPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl<const N: usize> Player<N> for AiPlayer {
    fn select_move(
        &mut self,
        engine: &GameEngine<N>,
        words: &WordList,
        side: Side,
    ) -> Result<Vec<usize>, GameError> {
        let mv = select_move(
            engine.board(),
            engine.played_words(),
            words,
            side,
            self.strategy,
        )?;
        log::debug!("Computer chose {} at {:?}", mv.word, mv.indices);
        Ok(mv.indices)
    }
}
