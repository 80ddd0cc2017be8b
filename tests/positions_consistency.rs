use std::collections::HashSet;

use tictactoe_search::board::Board;
use tictactoe_search::rules::{Game, TicTacToe};
use tictactoe_search::search::{alpha_beta_search, minimax_search};

fn reachable_positions() -> Vec<Board> {
    let g = TicTacToe;
    let mut seen = HashSet::new();
    let mut stack = vec![Board::empty()];
    let mut out = Vec::new();
    while let Some(b) = stack.pop() {
        if !seen.insert(b) { continue; }
        out.push(b);
        if g.is_terminal(&b) { continue; }
        for a in g.actions(&b) { stack.push(g.result(&b, a).unwrap()); }
    }
    out
}

#[test]
fn reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn alphabeta_matches_minimax_everywhere() {
    let g = TicTacToe;
    let mut checked = 0usize;
    for b in reachable_positions() {
        let mm = minimax_search(&g, &b).unwrap();
        let ab = alpha_beta_search(&g, &b).unwrap();
        assert!(ab.nodes <= mm.nodes, "{}: alpha-beta {} > minimax {}", b.encode(), ab.nodes, mm.nodes);
        if g.is_terminal(&b) {
            assert_eq!(mm.bestmove, None);
            assert_eq!(ab.bestmove, None);
            continue;
        }
        assert_eq!(ab.bestmove, mm.bestmove, "move mismatch on {}", b.encode());
        assert_eq!(ab.value, mm.value, "value mismatch on {}", b.encode());
        assert!(g.actions(&b).contains(&mm.bestmove.unwrap()));
        checked += 1;
    }
    assert!(checked > 4000);
}
