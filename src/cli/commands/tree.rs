//! Tree command - Statistics over the reachable state space

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    tictactoe::{GameOutcome, Player, depth_histogram, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Summarize the positions reachable under legal play")]
pub struct TreeArgs {
    /// Only count terminal positions
    #[arg(long)]
    pub terminal_only: bool,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let boards: Vec<_> = reachable_boards()?
        .into_iter()
        .filter(|b| !args.terminal_only || b.is_terminal())
        .collect();

    print_section("Reachable Positions");
    print_kv("Total", &format_number(boards.len()));

    let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
    for board in &boards {
        match GameOutcome::of(board) {
            Some(GameOutcome::Win(Player::X)) => x_wins += 1,
            Some(GameOutcome::Win(Player::O)) => o_wins += 1,
            Some(GameOutcome::Draw) => draws += 1,
            None => {}
        }
    }
    print_kv("X wins", &format_number(x_wins));
    print_kv("O wins", &format_number(o_wins));
    print_kv("Draws", &format_number(draws));

    println!("\nPositions by filled cells:");
    for (depth, count) in depth_histogram(&boards) {
        println!("  Depth {depth}: {count} positions");
    }

    Ok(())
}
