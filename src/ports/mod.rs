//! Ports (trait boundaries) between the search core and its collaborators.
//!
//! Drivers implement [`SearchStrategy`] and report to a [`SearchObserver`];
//! game loops take turns through [`MoveSource`].

pub mod mover;
pub mod observer;
pub mod strategy;

pub use mover::MoveSource;
pub use observer::SearchObserver;
pub use strategy::SearchStrategy;
