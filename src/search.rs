//! Uninformed search drivers

pub mod bfs;
pub mod dfs;
pub mod kind;
pub mod report;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use kind::StrategyKind;
pub use report::SearchReport;
