//! Diagnostics emitted when a driver reaches a terminal board

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use super::StrategyKind;

/// Snapshot of a search at the moment it reached a terminal board.
///
/// The branching factor and space bound are deliberately naive estimates:
/// BFS divides the root's filled-cell count by its empty-cell count and
/// raises the depth to the truncated result; DFS divides the leaf's legal
/// action count by its empty-cell count and reports linear space in the ply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy: StrategyKind,
    pub depth: usize,
    pub elapsed: Duration,
    pub branching_factor: f64,
    pub space_bound: u64,
    pub nodes_expanded: usize,
}

impl SearchReport {
    /// `numerator / empty_cells`, or 0 on a full board
    pub fn branching_estimate(numerator: usize, empty_cells: usize) -> f64 {
        if empty_cells == 0 {
            0.0
        } else {
            numerator as f64 / empty_cells as f64
        }
    }

    /// `depth ^ trunc(branching_factor)`, saturating
    pub fn exponential_space_bound(depth: usize, branching_factor: f64) -> u64 {
        let exponent = branching_factor.trunc().max(0.0) as u32;
        (depth as u64).saturating_pow(exponent)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Depth: {}, Time: {} nanoseconds, Branching Factor: {}, Space Complexity: O({}), Nodes: {}",
            self.strategy,
            self.depth,
            self.elapsed.as_nanos(),
            self.branching_factor,
            self.space_bound,
            self.nodes_expanded
        )
    }
}
