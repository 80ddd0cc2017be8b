use log::debug;

use crate::board::Player;
use crate::error::Result;
use crate::rules::Game;
use crate::search::{NodeCounter, SearchResult};

/// Minimax with alpha-beta pruning. Picks the same move as
/// [`minimax_search`](crate::search::minimax_search) while visiting no more nodes.
pub fn alpha_beta_search<G: Game>(game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
    let mut counter = NodeCounter::new();
    let (value, bestmove) = match game.to_move(state) {
        Player::X => ab_max(game, state, i32::MIN, i32::MAX, &mut counter)?,
        Player::O => ab_min(game, state, i32::MIN, i32::MAX, &mut counter)?,
    };
    debug!("alphabeta: best={:?} value={} nodes={} cutoffs={}", bestmove, value, counter.nodes(), counter.cutoffs());
    Ok(SearchResult::new(bestmove, value, &counter))
}

fn ab_max<G: Game>(game: &G, state: &G::State, mut alpha: i32, beta: i32, counter: &mut NodeCounter) -> Result<(i32, Option<G::Action>)> {
    if game.is_terminal(state) { return Ok((game.utility(state, Player::X), None)); }
    let mut v = i32::MIN;
    let mut best = None;
    for a in game.actions(state) {
        counter.visit();
        let (v2, _) = ab_min(game, &game.result(state, a)?, alpha, beta, counter)?;
        if v2 > v { v = v2; best = Some(a); }
        alpha = alpha.max(v);
        if alpha >= beta { counter.cutoff(); break; }
    }
    Ok((v, best))
}

fn ab_min<G: Game>(game: &G, state: &G::State, alpha: i32, mut beta: i32, counter: &mut NodeCounter) -> Result<(i32, Option<G::Action>)> {
    if game.is_terminal(state) { return Ok((game.utility(state, Player::O), None)); }
    let mut v = i32::MAX;
    let mut best = None;
    for a in game.actions(state) {
        counter.visit();
        let (v2, _) = ab_max(game, &game.result(state, a)?, alpha, beta, counter)?;
        if v2 < v { v = v2; best = Some(a); }
        beta = beta.min(v);
        if beta <= alpha { counter.cutoff(); break; }
    }
    Ok((v, best))
}
