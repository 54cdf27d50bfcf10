//! Tic-Tac-Toe rules engine

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Action, Board, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::{depth_histogram, format_board, reachable_boards};
pub use lines::{BOARD_SIZE, LineAnalyzer, WinLines, win_lines};
