//! Collaborators around the search drivers
//!
//! - Observer adapters for search diagnostics
//! - A single-game loop over two move sources
//! - A side-by-side driver benchmark

pub mod comparison;
pub mod game_loop;
pub mod observers;

pub use comparison::{BenchmarkRecord, BenchmarkResult, StrategySummary, benchmark};
pub use game_loop::{EngineMover, RandomMover, play_from, play_game};
pub use observers::{
    FanoutObserver, NullObserver, PrintObserver, ProgressObserver, RecordingObserver,
};

pub use crate::ports::{MoveSource, SearchObserver, SearchStrategy};
