//! Winning line generation for square boards

use std::iter::FusedIterator;

use super::{Cell, Player};

/// Side length of the standard board
pub const BOARD_SIZE: usize = 3;

/// Lazy sequence of the winning lines of an n×n board.
///
/// Yields n rows (top to bottom), n columns (left to right), the main
/// diagonal and then the anti-diagonal. Each line is a list of `(row, col)`
/// coordinates. Cloning or calling [`win_lines`] again restarts the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLines {
    n: usize,
    next: usize,
}

/// Winning lines for an n×n board, in scan order
pub fn win_lines(n: usize) -> WinLines {
    WinLines { n, next: 0 }
}

impl WinLines {
    fn total(&self) -> usize {
        2 * self.n + 2
    }

    fn line(&self, index: usize) -> Vec<(usize, usize)> {
        let n = self.n;
        if index < n {
            (0..n).map(|c| (index, c)).collect()
        } else if index < 2 * n {
            let c = index - n;
            (0..n).map(|r| (r, c)).collect()
        } else if index == 2 * n {
            (0..n).map(|i| (i, i)).collect()
        } else {
            (0..n).map(|i| (i, n - 1 - i)).collect()
        }
    }
}

impl Iterator for WinLines {
    type Item = Vec<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let line = self.line(self.next);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WinLines {}

impl FusedIterator for WinLines {}

/// Utility for inspecting winning lines on a grid
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of a line, if every cell on it holds the same mark
    pub fn line_owner(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE], line: &[(usize, usize)]) -> Option<Player> {
        let (first_row, first_col) = *line.first()?;
        let player = cells[first_row][first_col].player()?;
        line.iter()
            .all(|&(r, c)| cells[r][c] == player.to_cell())
            .then_some(player)
    }

    /// First completed line in scan order, with its owner
    pub fn first_complete_line(
        cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE],
    ) -> Option<(Player, Vec<(usize, usize)>)> {
        win_lines(BOARD_SIZE).find_map(|line| Self::line_owner(cells, &line).map(|p| (p, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three_has_eight_lines() {
        let lines: Vec<_> = win_lines(3).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(win_lines(3).len(), 8);
    }

    #[test]
    fn test_scan_order() {
        let lines: Vec<_> = win_lines(3).collect();
        assert_eq!(lines[0], vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(lines[2], vec![(2, 0), (2, 1), (2, 2)]);
        assert_eq!(lines[3], vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(lines[5], vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(lines[6], vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(lines[7], vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_general_n() {
        let lines: Vec<_> = win_lines(4).collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
        assert!(lines.iter().all(|line| line.len() == 4));
    }

    #[test]
    fn test_restartable() {
        let mut first = win_lines(3);
        first.next();
        first.next();
        let restarted: Vec<_> = win_lines(3).collect();
        assert_eq!(restarted.len(), 8);
        assert_eq!(first.len(), 6);

        let snapshot = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut lines = win_lines(3);
        for _ in 0..8 {
            assert!(lines.next().is_some());
        }
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_line_owner() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0] = [Cell::O, Cell::O, Cell::O];
        assert_eq!(
            LineAnalyzer::line_owner(&cells, &[(0, 0), (0, 1), (0, 2)]),
            Some(Player::O)
        );
        assert_eq!(LineAnalyzer::line_owner(&cells, &[(1, 0), (1, 1), (1, 2)]), None);

        cells[2] = [Cell::X, Cell::O, Cell::X];
        assert_eq!(LineAnalyzer::line_owner(&cells, &[(2, 0), (2, 1), (2, 2)]), None);
    }
}
