use log::debug;

use crate::board::Player;
use crate::error::Result;
use crate::rules::Game;
use crate::search::{NodeCounter, SearchResult};

/// Exhaustive minimax from `state`. Ties go to the first action in `actions` order.
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
    let mut counter = NodeCounter::new();
    let (value, bestmove) = match game.to_move(state) {
        Player::X => max_value(game, state, &mut counter)?,
        Player::O => min_value(game, state, &mut counter)?,
    };
    debug!("minimax: best={:?} value={} nodes={}", bestmove, value, counter.nodes());
    Ok(SearchResult::new(bestmove, value, &counter))
}

fn max_value<G: Game>(game: &G, state: &G::State, counter: &mut NodeCounter) -> Result<(i32, Option<G::Action>)> {
    if game.is_terminal(state) { return Ok((game.utility(state, Player::X), None)); }
    let mut v = i32::MIN;
    let mut best = None;
    for a in game.actions(state) {
        counter.visit();
        let (v2, _) = min_value(game, &game.result(state, a)?, counter)?;
        if v2 > v { v = v2; best = Some(a); }
    }
    Ok((v, best))
}

fn min_value<G: Game>(game: &G, state: &G::State, counter: &mut NodeCounter) -> Result<(i32, Option<G::Action>)> {
    if game.is_terminal(state) { return Ok((game.utility(state, Player::O), None)); }
    let mut v = i32::MAX;
    let mut best = None;
    for a in game.actions(state) {
        counter.visit();
        let (v2, _) = max_value(game, &game.result(state, a)?, counter)?;
        if v2 < v { v = v2; best = Some(a); }
    }
    Ok((v, best))
}
