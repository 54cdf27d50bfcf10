//! Enumeration of the positions reachable under legal play

use std::collections::{BTreeMap, HashSet, VecDeque};

use super::board::Board;

/// Every board reachable from the empty board by legal alternating moves,
/// in breadth-first order (so sorted by filled-cell count).
///
/// Play stops at terminal boards, so won positions are never extended.
/// The standard game has 5 478 such boards.
///
/// # Errors
///
/// Propagates any move the rules engine rejects while expanding a board.
pub fn reachable_boards() -> Result<Vec<Board>, crate::Error> {
    let root = Board::initial_state();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut boards = Vec::new();

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.is_terminal() {
            continue;
        }

        for action in board.legal_actions() {
            let next = board.apply(action)?;
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(boards)
}

/// Counts of boards per filled-cell count
pub fn depth_histogram(boards: &[Board]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for board in boards {
        *counts.entry(board.filled_count()).or_insert(0) += 1;
    }
    counts
}

/// Render a board as a one-line "XXX / OO. / ..." string
pub fn format_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_board_counts_match_expected() {
        let boards = reachable_boards().unwrap();
        assert_eq!(boards.len(), 5478);
        assert_eq!(boards.iter().filter(|b| b.is_terminal()).count(), 958);
        assert_eq!(boards.iter().filter(|b| b.is_draw()).count(), 16);
    }

    #[test]
    fn every_successor_is_enumerated() {
        let boards = reachable_boards().unwrap();
        let known: HashSet<Board> = boards.iter().copied().collect();
        for board in boards.iter().filter(|b| !b.is_terminal()) {
            for action in board.legal_actions() {
                assert!(known.contains(&board.apply(action).unwrap()));
            }
        }
    }

    #[test]
    fn histogram_by_depth() {
        let histogram = depth_histogram(&reachable_boards().unwrap());
        assert_eq!(histogram[&0], 1);
        assert_eq!(histogram[&1], 9);
        assert_eq!(histogram[&2], 72);
        assert_eq!(histogram[&3], 252);
        assert_eq!(histogram.values().sum::<usize>(), 5478);
    }

    #[test]
    fn format_board_one_line() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(format_board(&board), "XXX / OO. / ...");
    }
}
