//! Observer adapters for search drivers
//!
//! Observers allow composable collection of search diagnostics without
//! coupling the drivers to a particular output.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::SearchObserver,
    search::{SearchReport, StrategyKind},
    tictactoe::{Action, Board, format_board},
};

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Prints the one-line diagnostic for each terminal board reached
#[derive(Debug, Clone, Default)]
pub struct PrintObserver {
    verbose: bool,
}

impl PrintObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print every expanded board
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl SearchObserver for PrintObserver {
    fn on_node_expanded(&mut self, ply: usize, board: &Board) -> Result<()> {
        if self.verbose {
            println!("  ply {ply}: {}", format_board(board));
        }
        Ok(())
    }

    fn on_terminal_reached(&mut self, report: &SearchReport) -> Result<()> {
        println!("{report}");
        Ok(())
    }
}

/// Keeps every report and counts expansions
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    reports: Vec<SearchReport>,
    nodes_expanded: usize,
    deepest_expansion: usize,
    searches: usize,
    decisions: Vec<(StrategyKind, Option<Action>)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal-board reports in the order they were emitted
    pub fn reports(&self) -> &[SearchReport] {
        &self.reports
    }

    /// Boards expanded across all recorded searches
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Highest ply at which a board was expanded
    pub fn deepest_expansion(&self) -> usize {
        self.deepest_expansion
    }

    /// Number of searches started
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// Action chosen by each finished search
    pub fn decisions(&self) -> &[(StrategyKind, Option<Action>)] {
        &self.decisions
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl SearchObserver for RecordingObserver {
    fn on_search_start(&mut self, _strategy: StrategyKind, _root: &Board) -> Result<()> {
        self.searches += 1;
        Ok(())
    }

    fn on_node_expanded(&mut self, ply: usize, _board: &Board) -> Result<()> {
        self.nodes_expanded += 1;
        self.deepest_expansion = self.deepest_expansion.max(ply);
        Ok(())
    }

    fn on_terminal_reached(&mut self, report: &SearchReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn on_search_end(&mut self, strategy: StrategyKind, action: Option<Action>) -> Result<()> {
        self.decisions.push((strategy, action));
        Ok(())
    }
}

/// Progress bar observer - advances once per finished search
pub struct ProgressObserver {
    progress_bar: ProgressBar,
}

impl ProgressObserver {
    /// Create a progress bar sized for `total_searches`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProgressBarTemplate`] if the bar style is rejected.
    pub fn new(total_searches: u64) -> Result<Self> {
        let progress_bar = ProgressBar::new(total_searches);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} searches ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Self { progress_bar })
    }

    pub fn finish(&self) {
        self.progress_bar.finish_with_message("done");
    }
}

impl SearchObserver for ProgressObserver {
    fn on_search_start(&mut self, strategy: StrategyKind, _root: &Board) -> Result<()> {
        self.progress_bar.set_message(strategy.to_string());
        Ok(())
    }

    fn on_search_end(&mut self, _strategy: StrategyKind, _action: Option<Action>) -> Result<()> {
        self.progress_bar.inc(1);
        Ok(())
    }
}

/// Forwards every event to each inner observer in turn
#[derive(Default)]
pub struct FanoutObserver<'a> {
    observers: Vec<&'a mut dyn SearchObserver>,
}

impl<'a> FanoutObserver<'a> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn with(mut self, observer: &'a mut dyn SearchObserver) -> Self {
        self.observers.push(observer);
        self
    }
}

impl SearchObserver for FanoutObserver<'_> {
    fn on_search_start(&mut self, strategy: StrategyKind, root: &Board) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|o| o.on_search_start(strategy, root))
    }

    fn on_node_expanded(&mut self, ply: usize, board: &Board) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|o| o.on_node_expanded(ply, board))
    }

    fn on_terminal_reached(&mut self, report: &SearchReport) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|o| o.on_terminal_reached(report))
    }

    fn on_search_end(&mut self, strategy: StrategyKind, action: Option<Action>) -> Result<()> {
        self.observers
            .iter_mut()
            .try_for_each(|o| o.on_search_end(strategy, action))
    }
}
