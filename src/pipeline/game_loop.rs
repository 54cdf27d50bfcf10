//! Single-game loop driving two move sources

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    ports::{MoveSource, SearchObserver, SearchStrategy},
    tictactoe::{Action, BOARD_SIZE, Board, Cell, Game, Player},
    utils::random_move,
};

/// Plays uniformly random empty cells by retrying [`random_move`]
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMover {
    fn next_action(&mut self, board: &Board) -> Result<Action> {
        if board.legal_actions().is_empty() {
            return Err(crate::Error::NoLegalActions {
                board: board.encode(),
            });
        }

        loop {
            let action = random_move(BOARD_SIZE, &mut self.rng);
            if board.get(action) == Some(Cell::Empty) {
                return Ok(action);
            }
        }
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}

/// Takes its turns by asking a search driver
pub struct EngineMover {
    strategy: Box<dyn SearchStrategy>,
    observer: Box<dyn SearchObserver>,
}

impl EngineMover {
    pub fn new(strategy: Box<dyn SearchStrategy>, observer: Box<dyn SearchObserver>) -> Self {
        Self { strategy, observer }
    }
}

impl MoveSource for EngineMover {
    fn next_action(&mut self, board: &Board) -> Result<Action> {
        self.strategy
            .select_action(board, self.observer.as_mut())?
            .ok_or_else(|| crate::Error::NoActionProposed {
                strategy: self.strategy.name().to_string(),
                board: board.encode(),
            })
    }

    fn name(&self) -> String {
        self.strategy.name().to_string()
    }
}

/// Play one game from the empty board, X first
///
/// # Errors
///
/// Returns the first error raised by a move source or the rules engine.
pub fn play_game(x: &mut dyn MoveSource, o: &mut dyn MoveSource) -> Result<Game> {
    play_from(Board::initial_state(), x, o)
}

/// Play one game from `start` until it is terminal
///
/// # Errors
///
/// Returns the first error raised by a move source or the rules engine.
pub fn play_from(start: Board, x: &mut dyn MoveSource, o: &mut dyn MoveSource) -> Result<Game> {
    let mut game = Game::from_board(start);

    while !game.is_over() {
        let board = game.current_state();
        let action = match board.current_player() {
            Player::X => x.next_action(&board)?,
            Player::O => o.next_action(&board)?,
        };
        game.play(action)?;
    }

    Ok(game)
}
