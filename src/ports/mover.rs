//! Move source port - anything that can take a turn in a game

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// A participant in a game loop: a search engine, a random mover, a human
pub trait MoveSource {
    /// Choose an action for the side to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no action can be produced (terminal board, failed
    /// input, driver error).
    fn next_action(&mut self, board: &Board) -> Result<Action>;

    /// Display name used in game summaries
    fn name(&self) -> String;
}
