//! Side-by-side benchmark of search drivers over a set of boards
//!
//! Each driver is run once per board with a fresh [`RecordingObserver`], so
//! the numbers reflect traversal order alone: how many boards were expanded,
//! how many leaves were touched, and how long the call took.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::observers::{FanoutObserver, RecordingObserver};
use crate::{
    Result,
    ports::{SearchObserver, SearchStrategy},
    search::StrategyKind,
    tictactoe::{Action, Board},
};

/// Outcome of one driver on one board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub strategy: StrategyKind,
    pub board: Board,
    pub action: Option<Action>,
    pub nodes_expanded: usize,
    pub leaves_reported: usize,
    pub elapsed: Duration,
}

impl BenchmarkRecord {
    /// Whether the proposed action is playable on the searched board
    pub fn action_is_legal(&self) -> bool {
        self.action
            .is_some_and(|a| self.board.legal_actions().contains(&a))
    }
}

/// Aggregate numbers for one driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: StrategyKind,
    pub searches: usize,
    pub total_nodes_expanded: usize,
    pub total_leaves_reported: usize,
    pub total_elapsed: Duration,
    pub illegal_actions: usize,
}

impl StrategySummary {
    fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            searches: 0,
            total_nodes_expanded: 0,
            total_leaves_reported: 0,
            total_elapsed: Duration::ZERO,
            illegal_actions: 0,
        }
    }

    fn record(&mut self, record: &BenchmarkRecord) {
        self.searches += 1;
        self.total_nodes_expanded += record.nodes_expanded;
        self.total_leaves_reported += record.leaves_reported;
        self.total_elapsed += record.elapsed;
        if !record.board.is_terminal() && !record.action_is_legal() {
            self.illegal_actions += 1;
        }
    }

    /// Average nodes expanded per search
    pub fn mean_nodes_expanded(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.total_nodes_expanded as f64 / self.searches as f64
        }
    }

    /// Average wall-clock time per search
    pub fn mean_elapsed(&self) -> Duration {
        u32::try_from(self.searches)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_elapsed / n)
    }
}

/// Full benchmark result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub records: Vec<BenchmarkRecord>,
    pub summaries: Vec<StrategySummary>,
}

impl BenchmarkResult {
    pub fn summary(&self, strategy: StrategyKind) -> Option<&StrategySummary> {
        self.summaries.iter().find(|s| s.strategy == strategy)
    }

    /// Pretty-printed JSON for the whole result
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Boards on which the drivers proposed different actions
    pub fn disagreements(&self) -> usize {
        let per_strategy = self.summaries.len();
        if per_strategy < 2 {
            return 0;
        }
        let boards = self.records.len() / per_strategy;
        (0..boards)
            .filter(|&i| {
                let first = self.records[i].action;
                (1..per_strategy).any(|s| self.records[s * boards + i].action != first)
            })
            .count()
    }
}

/// Run every driver over every board, driver by driver.
///
/// `extra` receives all events alongside the internal recorder (progress
/// display, printing).
///
/// # Errors
///
/// Propagates driver and observer errors.
pub fn benchmark(
    strategies: &mut [Box<dyn SearchStrategy>],
    boards: &[Board],
    extra: &mut dyn SearchObserver,
) -> Result<BenchmarkResult> {
    let mut records = Vec::with_capacity(strategies.len() * boards.len());
    let mut summaries = Vec::with_capacity(strategies.len());

    for strategy in strategies.iter_mut() {
        let mut summary = StrategySummary::new(strategy.kind());

        for board in boards {
            let mut recorder = RecordingObserver::new();
            let started = Instant::now();
            let action = {
                let mut fanout = FanoutObserver::new().with(&mut recorder).with(&mut *extra);
                strategy.select_action(board, &mut fanout)?
            };
            let record = BenchmarkRecord {
                strategy: strategy.kind(),
                board: *board,
                action,
                nodes_expanded: recorder.nodes_expanded(),
                leaves_reported: recorder.reports().len(),
                elapsed: started.elapsed(),
            };
            summary.record(&record);
            records.push(record);
        }

        summaries.push(summary);
    }

    Ok(BenchmarkResult { records, summaries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::observers::NullObserver,
        search::{BreadthFirstSearch, DepthFirstSearch},
    };

    fn drivers() -> Vec<Box<dyn SearchStrategy>> {
        vec![
            Box::new(BreadthFirstSearch::new()),
            Box::new(DepthFirstSearch::with_seed(11)),
        ]
    }

    #[test]
    fn benchmark_records_each_pair() {
        let boards = [
            Board::from_string("XX. OO. ...").unwrap(),
            Board::from_string("XOX XOO OX.").unwrap(),
        ];
        let result = benchmark(&mut drivers(), &boards, &mut NullObserver).unwrap();

        assert_eq!(result.records.len(), 4);
        assert_eq!(result.summaries.len(), 2);
        for summary in &result.summaries {
            assert_eq!(summary.searches, 2);
            assert_eq!(summary.illegal_actions, 0);
        }

        // BFS takes the win at (0, 2); DFS passes it over for (1, 2)
        assert_eq!(result.records[0].action, Some(Action::new(0, 2)));
        assert_eq!(result.records[2].action, Some(Action::new(1, 2)));
        assert_eq!(result.disagreements(), 1);
    }

    #[test]
    fn summary_means() {
        let boards = [Board::from_string("XOX XOO OX.").unwrap()];
        let result = benchmark(&mut drivers(), &boards, &mut NullObserver).unwrap();
        let bfs = result.summary(StrategyKind::BreadthFirst).unwrap();
        assert_eq!(bfs.mean_nodes_expanded(), 1.0);
        assert!(bfs.mean_elapsed() <= bfs.total_elapsed);

        let json = result.to_json().unwrap();
        assert!(json.contains("\"breadth-first\""));
    }
}
