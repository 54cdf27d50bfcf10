//! Driver contracts checked over every reachable non-terminal position

use ttt_search::{
    config::SearchConfig,
    pipeline::observers::{NullObserver, RecordingObserver},
    ports::SearchStrategy,
    search::{BreadthFirstSearch, DepthFirstSearch, StrategyKind},
    tictactoe::{Action, Board, reachable_boards},
};

fn open_positions() -> Vec<Board> {
    reachable_boards().unwrap()
        .into_iter()
        .filter(|b| !b.is_terminal())
        .collect()
}

mod legality {
    use super::*;

    #[test]
    fn bfs_always_returns_a_legal_action() {
        let mut bfs = BreadthFirstSearch::new();
        for board in open_positions() {
            let action = bfs.select_action(&board, &mut NullObserver).unwrap();
            let action = action.unwrap_or_else(|| panic!("no action for {}", board.encode()));
            assert!(
                board.legal_actions().contains(&action),
                "bfs proposed {action} on {}",
                board.encode()
            );
        }
    }

    #[test]
    fn dfs_always_returns_a_legal_action() {
        let mut dfs = DepthFirstSearch::with_seed(2024);
        for board in open_positions() {
            let action = dfs.select_action(&board, &mut NullObserver).unwrap();
            let action = action.unwrap_or_else(|| panic!("no action for {}", board.encode()));
            assert!(
                board.legal_actions().contains(&action),
                "dfs proposed {action} on {}",
                board.encode()
            );
        }
        // Some positions only have game-ending moves left
        assert!(dfs.fallbacks() > 0);
    }

    #[test]
    fn dfs_fallback_path_returns_legal_actions() {
        let forced: Vec<Board> = open_positions()
            .into_iter()
            .filter(|b| {
                b.legal_actions()
                    .iter()
                    .all(|&a| b.apply(a).is_ok_and(|next| next.is_terminal()))
            })
            .collect();
        assert!(!forced.is_empty());

        for seed in 0..8 {
            let mut dfs = DepthFirstSearch::with_seed(seed);
            for board in &forced {
                let before = dfs.fallbacks();
                let action = dfs.select_action(board, &mut NullObserver).unwrap().unwrap();
                assert_eq!(dfs.fallbacks(), before + 1);
                assert!(board.legal_actions().contains(&action));
            }
        }
    }

    #[test]
    fn terminal_boards_yield_no_action() {
        for board in reachable_boards().unwrap().into_iter().filter(|b| b.is_terminal()) {
            for kind in StrategyKind::all() {
                let mut driver = SearchConfig::new(kind).with_seed(1).build();
                assert_eq!(driver.select_action(&board, &mut NullObserver).unwrap(), None);
            }
        }
    }
}

mod traversal_order {
    use super::*;

    #[test]
    fn bfs_action_reaches_a_shallowest_terminal() {
        // Whatever BFS picks, no terminal board lies closer to the root than
        // the first terminal reachable through that action
        let board = Board::from_string("X.. .O. ..X").unwrap();
        let action = BreadthFirstSearch::new()
            .select_action(&board, &mut NullObserver)
            .unwrap()
            .unwrap();

        let shallowest = |start: Board| -> usize {
            let mut frontier = vec![start];
            let mut depth = 0;
            while !frontier.iter().any(|b| b.is_terminal()) {
                frontier = frontier
                    .iter()
                    .flat_map(|b| b.legal_actions().into_iter().map(move |a| b.apply(a).unwrap()))
                    .collect();
                depth += 1;
            }
            depth
        };

        assert_eq!(shallowest(board.apply(action).unwrap()) + 1, shallowest(board));
    }

    #[test]
    fn bfs_proposes_root_moves_for_deep_terminals() {
        // Each case's first terminal lies at least two plies below the root,
        // reached via a last move that differs from the expected root move
        let cases = [
            ("X.. .O. ..X", Action::new(0, 1)),
            ("X.. ... ...", Action::new(0, 1)),
            ("XO. ... ...", Action::new(1, 0)),
        ];
        for (text, expected) in cases {
            let board = Board::from_string(text).unwrap();
            let action = BreadthFirstSearch::new()
                .select_action(&board, &mut NullObserver)
                .unwrap();
            assert_eq!(action, Some(expected), "{text}");
        }
    }

    #[test]
    fn dfs_reports_every_leaf_it_touches() {
        // O to move with two cells left: (2, 0) leaves a live board, whose
        // only reply fills the board
        let board = Board::from_string("XOX XOO .X.").unwrap();
        let mut observer = RecordingObserver::new();
        let mut dfs = DepthFirstSearch::with_seed(3);
        let action = dfs.select_action(&board, &mut observer).unwrap();

        assert!(action.is_some());
        assert!(!observer.reports().is_empty());
        assert!(observer.reports().iter().all(|r| r.strategy == StrategyKind::DepthFirst));
        assert!(observer.reports().iter().all(|r| r.depth >= 2));
    }

    #[test]
    fn drivers_disagree_on_an_immediate_win() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        let bfs = BreadthFirstSearch::new()
            .select_action(&board, &mut NullObserver)
            .unwrap();
        let dfs = DepthFirstSearch::with_seed(0)
            .select_action(&board, &mut NullObserver)
            .unwrap();
        assert_eq!(bfs, Some(Action::new(0, 2)));
        assert_eq!(dfs, Some(Action::new(1, 2)));
    }
}
