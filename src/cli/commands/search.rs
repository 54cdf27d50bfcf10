//! Search command - Ask a driver for a move on one board

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    config::SearchConfig,
    pipeline::observers::{FanoutObserver, RecordingObserver},
    search::{SearchReport, StrategyKind},
    tictactoe::{Action, Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Choose a move for a board with BFS or DFS")]
pub struct SearchArgs {
    /// Board as 9 cells in row-major order ('.' for empty), e.g. "XO..X...."
    #[arg(default_value = ".........")]
    pub board: String,

    /// Search driver (bfs, dfs)
    #[arg(long, short = 's', default_value = "bfs")]
    pub strategy: String,

    /// Random seed for the depth-first fallback
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress per-leaf diagnostics
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print every expanded board
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput {
    board: Board,
    strategy: StrategyKind,
    to_move: Player,
    action: Option<Action>,
    nodes_expanded: usize,
    reports: Vec<SearchReport>,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let strategy: StrategyKind = args.strategy.parse()?;

    let mut config = SearchConfig::new(strategy)
        .with_diagnostics(!args.quiet && !args.json)
        .with_verbose(args.verbose);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut driver = config.build();
    let mut printer = config.observer();
    let mut recorder = RecordingObserver::new();
    let action = {
        let mut fanout = FanoutObserver::new()
            .with(printer.as_mut())
            .with(&mut recorder);
        driver.select_action(&board, &mut fanout)?
    };

    if args.json {
        let output = SearchOutput {
            board,
            strategy,
            to_move: board.current_player(),
            action,
            nodes_expanded: recorder.nodes_expanded(),
            reports: recorder.reports().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_section(&format!("{} search", driver.name()));
    print_board(&board);
    print_kv("To move", &board.current_player().to_string());
    print_kv("Nodes expanded", &recorder.nodes_expanded().to_string());
    print_kv("Leaves reached", &recorder.reports().len().to_string());

    match action {
        Some(action) => print_kv("Chosen action", &action.to_string()),
        None if board.is_terminal() => print_kv("Chosen action", "none (board is terminal)"),
        None => {
            return Err(anyhow!(
                "{} proposed no action for non-terminal board {}",
                driver.name(),
                board.encode()
            ));
        }
    }

    Ok(())
}
