//! Strategy port - abstraction over move-choosing search drivers

use super::SearchObserver;
use crate::{
    Result,
    search::StrategyKind,
    tictactoe::{Action, Board},
};

/// Search driver that proposes an action for the side to move
///
/// Implemented by [`crate::search::BreadthFirstSearch`] and
/// [`crate::search::DepthFirstSearch`]. Neither evaluates who wins; they
/// differ only in traversal order.
///
/// # Examples
///
/// ```
/// use ttt_search::{
///     pipeline::observers::NullObserver,
///     ports::SearchStrategy,
///     search::BreadthFirstSearch,
///     tictactoe::Board,
/// };
///
/// let mut bfs = BreadthFirstSearch::new();
/// let board = Board::initial_state();
/// let action = bfs.select_action(&board, &mut NullObserver)?;
/// assert!(action.is_some_and(|a| board.legal_actions().contains(&a)));
/// # Ok::<(), ttt_search::Error>(())
/// ```
pub trait SearchStrategy: Send {
    /// Which traversal this driver implements
    fn kind(&self) -> StrategyKind;

    /// Propose an action for `board`.
    ///
    /// Returns `Ok(None)` when `board` is already terminal.
    ///
    /// # Errors
    ///
    /// Propagates errors raised by the observer.
    fn select_action(
        &mut self,
        board: &Board,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Action>>;

    /// Human-readable name of the driver
    fn name(&self) -> &'static str {
        self.kind().label()
    }
}
