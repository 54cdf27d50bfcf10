//! Play command - One game between a search driver and a random or human player

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    config::SearchConfig,
    pipeline::game_loop::{EngineMover, RandomMover, play_game},
    ports::MoveSource,
    search::StrategyKind,
    tictactoe::{Action, Board, Cell, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play one game against a search driver")]
pub struct PlayArgs {
    /// Search driver for the engine (bfs, dfs)
    #[arg(long, short = 'e', default_value = "bfs")]
    pub engine: String,

    /// Which token the engine controls (`x` or `o`)
    #[arg(long = "engine-plays", default_value = "o")]
    pub engine_plays: String,

    /// Read the opponent's moves from stdin instead of playing randomly
    #[arg(long)]
    pub human: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print search diagnostics for every engine move
    #[arg(long, short = 'd')]
    pub diagnostics: bool,
}

/// Reads "row col" moves from stdin, re-prompting until the cell is empty
struct StdinMover;

impl MoveSource for StdinMover {
    fn next_action(&mut self, board: &Board) -> crate::Result<Action> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!();
            print_board(board);
            print!("Your move as {} (row col): ", board.current_player());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Err(crate::Error::Io {
                    operation: "read move from stdin".to_string(),
                    source: io::Error::from(io::ErrorKind::UnexpectedEof),
                });
            };

            match line?.parse::<Action>() {
                Ok(action) if board.get(action) == Some(Cell::Empty) => return Ok(action),
                Ok(action) => println!("Cell {action} is taken, try again."),
                Err(e) => println!("{e}"),
            }
        }
    }

    fn name(&self) -> String {
        "human".to_string()
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let strategy: StrategyKind = args.engine.parse()?;
    let engine_player: Player = args.engine_plays.parse()?;

    let mut config = SearchConfig::new(strategy).with_diagnostics(args.diagnostics);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut engine = EngineMover::new(config.build(), config.observer());
    let mut opponent: Box<dyn MoveSource> = if args.human {
        Box::new(StdinMover)
    } else {
        match args.seed {
            Some(seed) => Box::new(RandomMover::with_seed(seed.wrapping_add(1))),
            None => Box::new(RandomMover::new()),
        }
    };

    let engine_name = engine.name();
    let opponent_name = opponent.name();
    let game = match engine_player {
        Player::X => play_game(&mut engine, opponent.as_mut())?,
        Player::O => play_game(opponent.as_mut(), &mut engine)?,
    };

    print_section(&format!("{engine_name} ({engine_player}) vs {opponent_name}"));
    for (i, m) in game.moves.iter().enumerate() {
        let mover = if m.player == engine_player {
            &engine_name
        } else {
            &opponent_name
        };
        println!("  {:>2}. {} {} ({mover})", i + 1, m.player, m.action);
    }
    println!();
    print_board(&game.current_state());

    let result = match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == engine_player => "engine wins",
        Some(GameOutcome::Win(_)) => "engine loses",
        Some(GameOutcome::Draw) => "draw",
        None => "unfinished",
    };
    print_kv("Result", result);
    if let Some(outcome) = game.outcome {
        print_kv("Score (X view)", &outcome.score().to_string());
    }

    Ok(())
}
