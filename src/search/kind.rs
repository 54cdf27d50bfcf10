//! Identifiers for the available search drivers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Traversal order of a search driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Level-order traversal with a FIFO queue
    #[default]
    BreadthFirst,
    /// Recursive descent, first child first
    DepthFirst,
}

impl StrategyKind {
    const EXPECTED: &'static str = "bfs, breadth-first, dfs, depth-first";

    /// All drivers, in a stable order
    pub fn all() -> [StrategyKind; 2] {
        [StrategyKind::BreadthFirst, StrategyKind::DepthFirst]
    }

    /// Short label ("bfs" / "dfs")
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::BreadthFirst => "bfs",
            StrategyKind::DepthFirst => "dfs",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrategyKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(StrategyKind::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(StrategyKind::DepthFirst),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}
