//! Breadth-first search driver

use std::{collections::VecDeque, time::Instant};

use super::{SearchReport, StrategyKind};
use crate::{
    Result,
    ports::{SearchObserver, SearchStrategy},
    tictactoe::{Action, Board},
};

/// Level-order flood fill over the game tree.
///
/// Every queued board carries the root-level action it descends from. The
/// first terminal board dequeued ends the search and its root-level action is
/// returned, so the choice depends only on queue order and not on who wins.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSearch {
    peak_frontier: usize,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest queue length seen during the most recent search
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    fn root_report(root: &Board, started: Instant, nodes_expanded: usize) -> SearchReport {
        let empty_cells = root.empty_count();
        let depth = root.filled_count();
        let branching_factor = SearchReport::branching_estimate(depth, empty_cells);
        SearchReport {
            strategy: StrategyKind::BreadthFirst,
            depth,
            elapsed: started.elapsed(),
            branching_factor,
            space_bound: SearchReport::exponential_space_bound(depth, branching_factor),
            nodes_expanded,
        }
    }
}

impl SearchStrategy for BreadthFirstSearch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BreadthFirst
    }

    fn select_action(
        &mut self,
        board: &Board,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Action>> {
        let started = Instant::now();
        observer.on_search_start(self.kind(), board)?;

        let mut queue: VecDeque<(Board, Option<Action>, usize)> = VecDeque::from([(*board, None, 1)]);
        let mut nodes_expanded = 0;
        self.peak_frontier = queue.len();

        while let Some((current, origin, ply)) = queue.pop_front() {
            if current.is_terminal() {
                let report = Self::root_report(board, started, nodes_expanded);
                observer.on_terminal_reached(&report)?;
                observer.on_search_end(self.kind(), origin)?;
                return Ok(origin);
            }

            observer.on_node_expanded(ply, &current)?;
            nodes_expanded += 1;

            for action in current.legal_actions() {
                let next = current.apply(action)?;
                queue.push_back((next, origin.or(Some(action)), ply + 1));
            }
            self.peak_frontier = self.peak_frontier.max(queue.len());
        }

        observer.on_search_end(self.kind(), None)?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observers::{NullObserver, RecordingObserver};

    #[test]
    fn finds_immediate_win_first() {
        // X to move; (0, 2) completes the top row and is the only one-ply terminal
        let board = Board::from_string("XX. OO. ...").unwrap();
        let mut bfs = BreadthFirstSearch::new();
        let action = bfs.select_action(&board, &mut NullObserver).unwrap();
        assert_eq!(action, Some(Action::new(0, 2)));
    }

    #[test]
    fn first_terminal_in_queue_order_is_chosen() {
        // O to move; blocking at (0, 2) is dequeued first but is not terminal,
        // (1, 2) completes O's middle row
        let board = Board::from_string("XX. OO. X..").unwrap();
        let mut bfs = BreadthFirstSearch::new();
        let action = bfs.select_action(&board, &mut NullObserver).unwrap();
        assert_eq!(action, Some(Action::new(1, 2)));
    }

    #[test]
    fn deep_terminal_returns_its_root_level_action() {
        // O to move; the first terminal in queue order is three plies down:
        // O(0, 1), X(0, 2), O(2, 1) completes the middle column. The root
        // move (0, 1) is proposed, not the last move (2, 1)
        let board = Board::from_string("X.. .O. ..X").unwrap();
        let mut observer = RecordingObserver::new();
        let action = BreadthFirstSearch::new()
            .select_action(&board, &mut observer)
            .unwrap();
        assert_eq!(action, Some(Action::new(0, 1)));
        assert_eq!(observer.deepest_expansion(), 4);
    }

    #[test]
    fn terminal_root_returns_none() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let mut observer = RecordingObserver::new();
        let mut bfs = BreadthFirstSearch::new();
        assert_eq!(bfs.select_action(&board, &mut observer).unwrap(), None);
        assert_eq!(observer.reports().len(), 1);
        assert_eq!(observer.nodes_expanded(), 0);
    }

    #[test]
    fn empty_board_returns_a_root_level_action() {
        let board = Board::initial_state();
        let mut observer = RecordingObserver::new();
        let mut bfs = BreadthFirstSearch::new();
        let action = bfs.select_action(&board, &mut observer).unwrap().unwrap();

        assert!(board.legal_actions().contains(&action));
        let report = &observer.reports()[0];
        assert_eq!(report.depth, 0);
        assert_eq!(report.branching_factor, 0.0);
        assert_eq!(report.space_bound, 1);
        // The earliest terminal boards sit five plies down
        assert!(observer.deepest_expansion() >= 5);
        assert!(bfs.peak_frontier() > 9);
    }

    #[test]
    fn reports_root_diagnostics() {
        // 5 filled, 4 empty -> 1.25 -> O(5^1)
        let board = Board::from_string("XOX .O. X..").unwrap();
        let mut observer = RecordingObserver::new();
        BreadthFirstSearch::new()
            .select_action(&board, &mut observer)
            .unwrap();
        let report = &observer.reports()[0];
        assert_eq!(report.strategy, StrategyKind::BreadthFirst);
        assert_eq!(report.depth, 5);
        assert_eq!(report.branching_factor, 1.25);
        assert_eq!(report.space_bound, 5);
    }
}
