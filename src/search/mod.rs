pub mod alphabeta;
pub mod minimax;
pub mod stats;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::Game;

pub use alphabeta::alpha_beta_search;
pub use minimax::minimax_search;
pub use stats::NodeCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<A> {
    /// `None` only when the root is terminal.
    pub bestmove: Option<A>,
    /// Root value as backed up by the search (X maximizes, O minimizes).
    pub value: i32,
    pub nodes: u64,
    pub cutoffs: u64,
}

impl<A> SearchResult<A> {
    pub(crate) fn new(bestmove: Option<A>, value: i32, counter: &NodeCounter) -> Self {
        Self { bestmove, value, nodes: counter.nodes(), cutoffs: counter.cutoffs() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[value(alias = "1")]
    Minimax,
    #[value(aliases = ["2", "alphabeta"])]
    AlphaBeta,
}

impl Algorithm {
    pub fn search<G: Game>(self, game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
        match self {
            Algorithm::Minimax => minimax_search(game, state),
            Algorithm::AlphaBeta => alpha_beta_search(game, state),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "MiniMax"),
            Algorithm::AlphaBeta => write!(f, "MiniMax with alpha-beta pruning"),
        }
    }
}

/// Driver entry point: run `algorithm` on `state`.
pub fn search<G: Game>(algorithm: Algorithm, game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
    algorithm.search(game, state)
}
