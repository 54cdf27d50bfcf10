//! Compare command - Benchmark BFS and DFS over reachable positions

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{format_duration, format_number, print_kv, print_section, print_subsection},
    config::SearchConfig,
    pipeline::{
        comparison::benchmark,
        observers::{NullObserver, ProgressObserver},
    },
    ports::SearchStrategy,
    search::StrategyKind,
    tictactoe::{Board, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Benchmark the search drivers side by side")]
pub struct CompareArgs {
    /// Only search boards with this many filled cells (0-8)
    #[arg(long, short = 'f')]
    pub filled: Option<usize>,

    /// Random seed for the depth-first fallback
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the full per-board result as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let boards: Vec<Board> = reachable_boards()?
        .into_iter()
        .filter(|b| !b.is_terminal())
        .filter(|b| args.filled.is_none_or(|n| b.filled_count() == n))
        .collect();

    if boards.is_empty() {
        return Err(anyhow!(
            "No non-terminal reachable boards with {} filled cells",
            args.filled.unwrap_or_default()
        ));
    }

    let mut strategies: Vec<Box<dyn SearchStrategy>> = StrategyKind::all()
        .into_iter()
        .map(|kind| {
            let config = SearchConfig::new(kind).with_diagnostics(false);
            let config = match args.seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            config.build()
        })
        .collect();

    if !args.json {
        println!(
            "Comparing {} drivers on {} boards",
            strategies.len(),
            format_number(boards.len())
        );
    }

    let total = (strategies.len() * boards.len()) as u64;
    let result = if args.no_progress || args.json {
        benchmark(&mut strategies, &boards, &mut NullObserver)?
    } else {
        let mut progress = ProgressObserver::new(total)?;
        let result = benchmark(&mut strategies, &boards, &mut progress)?;
        progress.finish();
        result
    };

    if args.json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    print_section("Benchmark Results");
    for summary in &result.summaries {
        print_subsection(&summary.strategy.to_string());
        print_kv("Searches", &format_number(summary.searches));
        print_kv("Nodes expanded", &format_number(summary.total_nodes_expanded));
        print_kv("Mean nodes", &format!("{:.1}", summary.mean_nodes_expanded()));
        print_kv("Leaves reported", &format_number(summary.total_leaves_reported));
        print_kv("Total time", &format_duration(summary.total_elapsed));
        print_kv("Mean time", &format_duration(summary.mean_elapsed()));
        print_kv("Illegal actions", &summary.illegal_actions.to_string());
    }

    print_subsection("Agreement");
    print_kv(
        "Different choices",
        &format!(
            "{} of {}",
            format_number(result.disagreements()),
            format_number(boards.len())
        ),
    );

    Ok(())
}
