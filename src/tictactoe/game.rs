//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_terminal() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Score from X's point of view: +1 X wins, -1 O wins, 0 draw
    pub fn score(self) -> i32 {
        match self {
            GameOutcome::Win(player) => player.goal(),
            GameOutcome::Draw => 0,
        }
    }
}

/// A single game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    current: Board,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::initial_state())
    }

    /// Start from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
            current: initial,
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, or the rules
    /// engine's illegal-move error.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.current_player();
        self.current = self.current.apply(action)?;
        self.moves.push(Move { action, player });
        self.outcome = GameOutcome::of(&self.current);

        Ok(())
    }

    /// Current board
    pub fn current_state(&self) -> Board {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every board from the initial position to the current one
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay, which indicates
    /// corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for m in &self.moves {
            state = state.apply(m.action)?;
            states.push(state);
        }
        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
