use tictactoe_search::board::{Action, Board};
use tictactoe_search::rules::TicTacToe;
use tictactoe_search::search::{alpha_beta_search, minimax_search, search, Algorithm};

fn b(s: &str) -> Board { s.parse().expect("valid board") }

#[test]
fn terminal_root_returns_no_move_and_zero_nodes() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        // Full board, no legal actions.
        let res = search(algorithm, &TicTacToe, &b("XOXXOOOXX")).unwrap();
        assert_eq!(res.bestmove, None);
        assert_eq!(res.nodes, 0);
        // Won board with empty cells left is terminal too.
        let res = search(algorithm, &TicTacToe, &b("XXXOO....")).unwrap();
        assert_eq!(res.bestmove, None);
        assert_eq!(res.nodes, 0);
    }
}

#[test]
fn minimax_visits_whole_tree_from_empty_board() {
    let res = minimax_search(&TicTacToe, &Board::empty()).unwrap();
    assert!(res.bestmove.is_some());
    // 549,946 positions in the full game tree, root excluded.
    assert_eq!(res.nodes, 549_945);
    assert_eq!(res.cutoffs, 0);
}

#[test]
fn alphabeta_prunes_from_empty_board() {
    let mm = minimax_search(&TicTacToe, &Board::empty()).unwrap();
    let ab = alpha_beta_search(&TicTacToe, &Board::empty()).unwrap();
    assert_eq!(ab.bestmove, mm.bestmove);
    assert_eq!(ab.value, mm.value);
    assert!(ab.nodes < mm.nodes, "alpha-beta {} vs minimax {}", ab.nodes, mm.nodes);
    assert!(ab.cutoffs > 0);
}

#[test]
fn o_takes_first_immediate_win() {
    // O to move; cell 3 completes the top row and is the first legal action.
    let board = b("OO.XX.X..");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let res = search(algorithm, &TicTacToe, &board).unwrap();
        assert_eq!(res.bestmove, Some(Action::new(3).unwrap()));
        assert_eq!(res.value, -1);
    }
}

#[test]
fn single_empty_cell_is_the_only_choice() {
    // X to move with one cell left.
    let board = b("XOXOOXX.O");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let res = search(algorithm, &TicTacToe, &board).unwrap();
        assert_eq!(res.bestmove, Some(Action::new(8).unwrap()));
        assert_eq!(res.nodes, 1);
    }
}

// (board, best move, minimax nodes, alpha-beta nodes)
const PINNED: [(&str, u8, Option<u64>, u64); 3] = [
    (".........", 1, Some(549_945), 2_321),
    ("........X", 1, Some(59_704), 883),
    (".......OX", 1, None, 537),
];

#[test]
fn pinned_choices_and_node_counts() {
    for (board, best, mm_nodes, ab_nodes) in PINNED {
        let board = b(board);
        let mm = minimax_search(&TicTacToe, &board).unwrap();
        let ab = alpha_beta_search(&TicTacToe, &board).unwrap();
        let expected = Some(Action::new(best).unwrap());
        assert_eq!(mm.bestmove, expected, "minimax on {}", board.encode());
        assert_eq!(ab.bestmove, expected, "alpha-beta on {}", board.encode());
        // Minimax generates every position below the root exactly once.
        let full = tictactoe_search::perft::tree_size(&board).unwrap() - 1;
        assert_eq!(mm.nodes, full);
        if let Some(n) = mm_nodes { assert_eq!(mm.nodes, n); }
        assert_eq!(ab.nodes, ab_nodes, "alpha-beta nodes on {}", board.encode());
    }
}

#[test]
fn finished_board_under_min_node_uses_o_utility() {
    // X to move, last cell completes X's top row. The child is scored inside
    // the Min role with utility(board, O), so the root value is -1.
    let board = b("XX.OOXOXO");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let res = search(algorithm, &TicTacToe, &board).unwrap();
        assert_eq!(res.bestmove, Some(Action::new(3).unwrap()));
        assert_eq!(res.value, -1);
        assert_eq!(res.nodes, 1);
    }
}
