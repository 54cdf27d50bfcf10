//! ttt-search CLI - breadth-first and depth-first move search for Tic-Tac-Toe
//!
//! This CLI provides:
//! - Move selection on a single board with either driver
//! - A game between a driver and a random or human opponent
//! - A side-by-side benchmark of the drivers
//! - Statistics about the reachable state space

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-search")]
#[command(version, about = "Uninformed game-tree search for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a move for a board
    Search(ttt_search::cli::commands::search::SearchArgs),

    /// Play one game against a search driver
    Play(ttt_search::cli::commands::play::PlayArgs),

    /// Benchmark BFS against DFS
    Compare(ttt_search::cli::commands::compare::CompareArgs),

    /// Summarize the reachable state space
    Tree(ttt_search::cli::commands::tree::TreeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => ttt_search::cli::commands::search::execute(args),
        Commands::Play(args) => ttt_search::cli::commands::play::execute(args),
        Commands::Compare(args) => ttt_search::cli::commands::compare::execute(args),
        Commands::Tree(args) => ttt_search::cli::commands::tree::execute(args),
    }
}
