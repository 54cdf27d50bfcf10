//! Configuration for building search drivers.

use serde::{Deserialize, Serialize};

use crate::{
    pipeline::observers::{NullObserver, PrintObserver},
    ports::{SearchObserver, SearchStrategy},
    search::{BreadthFirstSearch, DepthFirstSearch, StrategyKind},
};

/// Configuration for creating a search driver.
///
/// # Examples
///
/// ```
/// use ttt_search::config::SearchConfig;
/// use ttt_search::search::StrategyKind;
///
/// let config = SearchConfig::new(StrategyKind::DepthFirst)
///     .with_seed(42)
///     .with_diagnostics(false);
/// let driver = config.build();
/// assert_eq!(driver.kind(), StrategyKind::DepthFirst);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which driver to build
    pub strategy: StrategyKind,
    /// Seed for the depth-first random fallback
    pub seed: Option<u64>,
    /// Print the diagnostic line for each terminal board reached
    pub diagnostics: bool,
    /// Also print every expanded board
    pub verbose: bool,
}

impl SearchConfig {
    /// Create a configuration for the given driver.
    ///
    /// Uses default values for other parameters:
    /// - Seed: None (non-deterministic)
    /// - Diagnostics: on
    /// - Verbose: off
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            seed: None,
            diagnostics: true,
            verbose: false,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the configured driver
    pub fn build(&self) -> Box<dyn SearchStrategy> {
        match self.strategy {
            StrategyKind::BreadthFirst => Box::new(BreadthFirstSearch::new()),
            StrategyKind::DepthFirst => Box::new(match self.seed {
                Some(seed) => DepthFirstSearch::with_seed(seed),
                None => DepthFirstSearch::new(),
            }),
        }
    }

    /// Observer matching the diagnostics settings
    pub fn observer(&self) -> Box<dyn SearchObserver> {
        if self.diagnostics {
            Box::new(PrintObserver::new().verbose(self.verbose))
        } else {
            Box::new(NullObserver)
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}
