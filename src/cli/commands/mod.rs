//! Subcommand implementations

pub mod compare;
pub mod play;
pub mod search;
pub mod tree;
