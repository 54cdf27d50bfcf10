//! CLI infrastructure for the ttt-search binary
//!
//! Subcommands search a single board, play a game against the engine,
//! benchmark the drivers side by side, and summarize the state space.

pub mod commands;
pub mod output;
