//! Depth-first search driver

use std::time::Instant;

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::{SearchReport, StrategyKind};
use crate::{
    Result,
    ports::{SearchObserver, SearchStrategy},
    tictactoe::{Action, Board},
};

/// Recursive descent that proposes the first move whose subtree keeps going.
///
/// A terminal board yields `None`; any non-terminal board yields the first of
/// its actions (row-major) whose child is not terminal. When every child is
/// terminal the action is drawn uniformly from the same list. Outcomes are
/// never compared, so a winning move can be passed over.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    rng: StdRng,
    fallbacks: usize,
}

/// Per-search bookkeeping shared across the recursion
struct Trace {
    started: Instant,
    nodes_expanded: usize,
}

impl DepthFirstSearch {
    /// Create a driver with a non-deterministic fallback
    pub fn new() -> Self {
        Self::with_rng(StdRng::seed_from_u64(rand::random::<u64>()))
    }

    /// Create a driver whose random fallback is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng, fallbacks: 0 }
    }

    /// How many times the random fallback was used since construction,
    /// counting nodes at every depth of the recursion
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Search from `board`, which sits `ply` plies below the caller's root.
    ///
    /// Returns `None` immediately when `board` is terminal.
    pub fn search_from(
        &mut self,
        board: &Board,
        ply: usize,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Action>> {
        let mut trace = Trace {
            started: Instant::now(),
            nodes_expanded: 0,
        };
        self.descend(board, ply, &mut trace, observer)
    }

    fn descend(
        &mut self,
        board: &Board,
        ply: usize,
        trace: &mut Trace,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Action>> {
        let ply = ply + 1;

        if board.is_terminal() {
            let report = SearchReport {
                strategy: StrategyKind::DepthFirst,
                depth: ply,
                elapsed: trace.started.elapsed(),
                branching_factor: SearchReport::branching_estimate(
                    board.legal_actions().len(),
                    board.empty_count(),
                ),
                space_bound: ply as u64,
                nodes_expanded: trace.nodes_expanded,
            };
            observer.on_terminal_reached(&report)?;
            return Ok(None);
        }

        observer.on_node_expanded(ply, board)?;
        trace.nodes_expanded += 1;

        let actions = board.legal_actions();
        for &action in &actions {
            let next = board.apply(action)?;
            if self.descend(&next, ply, trace, observer)?.is_some() {
                return Ok(Some(action));
            }
        }

        // Every child ended the game
        self.fallbacks += 1;
        Ok(actions.choose(&mut self.rng).copied())
    }
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for DepthFirstSearch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DepthFirst
    }

    fn select_action(
        &mut self,
        board: &Board,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Action>> {
        observer.on_search_start(self.kind(), board)?;
        let action = self.search_from(board, 0, observer)?;
        observer.on_search_end(self.kind(), action)?;
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::pipeline::observers::{NullObserver, RecordingObserver};

    #[test]
    fn terminal_board_returns_none_immediately() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut observer = RecordingObserver::new();
        let mut dfs = DepthFirstSearch::with_seed(1);

        assert_eq!(dfs.select_action(&board, &mut observer).unwrap(), None);
        assert_eq!(observer.reports().len(), 1);
        assert_eq!(observer.reports()[0].depth, 1);
        assert_eq!(observer.reports()[0].branching_factor, 0.0);
        assert_eq!(observer.nodes_expanded(), 0);
    }

    #[test]
    fn empty_board_picks_first_action() {
        let mut dfs = DepthFirstSearch::with_seed(1);
        let action = dfs
            .select_action(&Board::initial_state(), &mut NullObserver)
            .unwrap();
        assert_eq!(action, Some(Action::new(0, 0)));
    }

    #[test]
    fn fallbacks_count_nested_nodes() {
        // (0, 0) is returned without a root-level fallback, but the descent
        // below it meets boards whose children all end the game
        let mut dfs = DepthFirstSearch::with_seed(1);
        dfs.select_action(&Board::initial_state(), &mut NullObserver)
            .unwrap();
        assert!(dfs.fallbacks() > 0);
    }

    #[test]
    fn skips_winning_move_whose_child_is_terminal() {
        // X to move; (0, 2) wins but ends the game, so (1, 2) is proposed
        let board = Board::from_string("XX. OO. ...").unwrap();
        let mut dfs = DepthFirstSearch::with_seed(1);
        let action = dfs.select_action(&board, &mut NullObserver).unwrap();
        assert_eq!(action, Some(Action::new(1, 2)));
    }

    #[test]
    fn fallback_draws_from_legal_actions() {
        // O to move; both empty cells complete an O line
        let board = Board::from_string("OXX OO. XX.").unwrap();
        let legal: HashSet<Action> = board.legal_actions().into_iter().collect();

        let mut seen = HashSet::new();
        for seed in 0..32 {
            let mut dfs = DepthFirstSearch::with_seed(seed);
            let action = dfs.select_action(&board, &mut NullObserver).unwrap().unwrap();
            assert!(legal.contains(&action));
            assert_eq!(dfs.fallbacks(), 1);
            seen.insert(action);
        }
        assert_eq!(seen, legal);
    }

    #[test]
    fn single_empty_cell_falls_back_to_it() {
        let board = Board::from_string("XOX XOO OX.").unwrap();
        let mut observer = RecordingObserver::new();
        let mut dfs = DepthFirstSearch::with_seed(7);

        let action = dfs.select_action(&board, &mut observer).unwrap();
        assert_eq!(action, Some(Action::new(2, 2)));
        assert_eq!(dfs.fallbacks(), 1);
        // The full child board is reported one ply down
        assert_eq!(observer.reports().len(), 1);
        assert_eq!(observer.reports()[0].depth, 2);
        assert_eq!(observer.reports()[0].space_bound, 2);
    }

    #[test]
    fn search_from_counts_plies_from_caller() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let mut observer = RecordingObserver::new();
        let mut dfs = DepthFirstSearch::with_seed(3);

        assert_eq!(dfs.search_from(&board, 4, &mut observer).unwrap(), None);
        assert_eq!(observer.reports()[0].depth, 5);
        // Won board with empty cells still lists them as legal
        assert_eq!(observer.reports()[0].branching_factor, 1.0);
    }
}
