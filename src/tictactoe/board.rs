//! Board state representation and the rules of play

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::{BOARD_SIZE, LineAnalyzer};
use crate::error::IllegalMoveReason;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Utility of a win for this player from X's point of view (+1 for X, -1 for O)
    pub fn goal(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl std::str::FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// A `(row, col)` coordinate identifying the cell to mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Whether both indices lie on the board
    pub fn in_range(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Action {
    type Err = crate::Error;

    /// Parse "row col", "row,col" or "(row, col)"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || crate::Error::ParseAction {
            input: s.to_string(),
        };
        let indices: Vec<usize> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| parse_error()))
            .collect::<Result<_, _>>()?;

        match indices.as_slice() {
            &[row, col] if row < BOARD_SIZE && col < BOARD_SIZE => Ok(Action { row, col }),
            _ => Err(parse_error()),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// A 3×3 board snapshot.
///
/// Boards are plain values: [`Board::apply`] returns a new board and never
/// touches the receiver. Every constructor enforces that X has placed either
/// as many marks as O or exactly one more, so the side to move can always be
/// derived from the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The empty starting board
    pub fn initial_state() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] if the mark counts could not
    /// arise from alternating play with X first.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, crate::Error> {
        let count = Self::count_pieces(&cells);
        if count.x == count.o || count.x == count.o + 1 {
            Ok(Board { cells })
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Create a board from a string of 9 cells in row-major order.
    ///
    /// Whitespace is ignored, so "XO. .X. ..O" works as well as "XO..X...O".
    /// Only `.` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given, a character is not a cell,
    /// or the piece counts are invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Self::from_rows(cells)
    }

    fn count_pieces(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `action`, or `None` when out of range
    pub fn get(&self, action: Action) -> Option<Cell> {
        action
            .in_range()
            .then(|| self.cells[action.row][action.col])
    }

    /// Number of cells holding a mark
    pub fn filled_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        Self::count_pieces(&self.cells).empty
    }

    /// Player whose turn it is: X when counts are equal, otherwise O
    pub fn current_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        debug_assert!(
            count.x == count.o || count.x == count.o + 1,
            "malformed board: X={}, O={}",
            count.x,
            count.o
        );
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order
    pub fn legal_actions(&self) -> Vec<Action> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Action { row, col }))
            .filter(|a| self.cells[a.row][a.col] == Cell::Empty)
            .collect()
    }

    /// Place the current player's mark at `action`, returning the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] when the action is off the board or
    /// the target cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        let reason = match self.get(action) {
            None => Some(IllegalMoveReason::OutOfRange),
            Some(Cell::Empty) => None,
            Some(_) => Some(IllegalMoveReason::Occupied),
        };
        if let Some(reason) = reason {
            return Err(crate::Error::IllegalMove { action, reason });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.current_player().to_cell();
        Ok(next)
    }

    /// Winner of the first completed line in scan order (rows, columns, diagonals)
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells).map(|(player, _)| player)
    }

    /// The game is over: someone has won or the board is full
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.empty_count() == 0 && self.winner().is_none()
    }

    /// Row-major string of the cells, e.g. "XO.......", accepted by [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_state()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Board {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Board::from_string(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}
