//! Observer port - instrumentation hooks for search drivers
//!
//! Search drivers report what they do through this port instead of printing,
//! so timing and traversal statistics can be displayed, recorded or ignored
//! without touching the search logic.

use crate::{
    Result,
    search::{SearchReport, StrategyKind},
    tictactoe::{Action, Board},
};

/// Observer trait for monitoring a search
///
/// # Event Sequence
///
/// 1. `on_search_start(strategy, root)` - Once per call to a driver
/// 2. `on_node_expanded(ply, board)` - For each non-terminal board whose
///    children are generated
/// 3. `on_terminal_reached(report)` - For each terminal board the driver
///    stops at (BFS reports once, DFS reports every leaf it touches)
/// 4. `on_search_end(strategy, action)` - Once with the chosen action
///
/// # Examples
///
/// ```
/// use ttt_search::{ports::SearchObserver, search::SearchReport};
///
/// struct LeafCounter {
///     leaves: usize,
/// }
///
/// impl SearchObserver for LeafCounter {
///     fn on_terminal_reached(&mut self, _report: &SearchReport) -> ttt_search::Result<()> {
///         self.leaves += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SearchObserver: Send {
    /// Called when a driver starts searching from `root`.
    fn on_search_start(&mut self, _strategy: StrategyKind, _root: &Board) -> Result<()> {
        Ok(())
    }

    /// Called before the children of a non-terminal board are generated.
    ///
    /// `ply` counts from 1 at the root.
    fn on_node_expanded(&mut self, _ply: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called when the driver reaches a terminal board.
    fn on_terminal_reached(&mut self, _report: &SearchReport) -> Result<()> {
        Ok(())
    }

    /// Called once the driver has chosen its action (or `None`).
    fn on_search_end(&mut self, _strategy: StrategyKind, _action: Option<Action>) -> Result<()> {
        Ok(())
    }
}
