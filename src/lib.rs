//! Uninformed game-tree search for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe rules engine over immutable board values
//! - Breadth-first and depth-first search drivers that propose moves
//! - Observer hooks for timing and branching diagnostics
//! - A single-game loop and a side-by-side driver benchmark
//!
//! The drivers are deliberately naive baselines: they stop at the first
//! terminal board their traversal order reaches and never compare outcomes.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;
pub mod utils;

pub use config::SearchConfig;
pub use error::{Error, IllegalMoveReason, Result};
pub use search::{BreadthFirstSearch, DepthFirstSearch, SearchReport, StrategyKind};
pub use tictactoe::{Action, Board, Cell, Player};
