//! Game rules consumed by the search engine.
//!
//! Searches only see the [`Game`] trait; [`TicTacToe`] is the 3x3 implementation.
//! X is always the maximizing side and O the minimizing side.

use std::fmt::Debug;

use crate::board::lines::{first_winner, has_line};
use crate::board::{Action, Board, Cell, Player};
use crate::error::{GameError, Result};

pub trait Game {
    type State: Clone + Debug;
    type Action: Copy + Eq + Debug;

    fn to_move(&self, state: &Self::State) -> Player;
    /// Legal actions in the order searches must try them.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;
    fn is_terminal(&self, state: &Self::State) -> bool;
    /// 1 if `player` has won, -1 if the opponent has, 0 otherwise.
    fn utility(&self, state: &Self::State, player: Player) -> i32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn check_winner(&self, board: &Board) -> Option<Player> { first_winner(board.cells()) }

    /// Rejects boards no X-first game can reach: bad piece counts, two winners,
    /// or a winner who was not the last to move.
    pub fn validate(&self, board: &Board) -> Result<()> {
        let (x, o) = (board.count(Cell::X), board.count(Cell::O));
        let invalid = |reason: String| Err(GameError::InvalidBoard { input: board.encode(), reason });
        if x != o && x != o + 1 {
            return invalid(format!("piece counts X={x}, O={o} (X must equal O or lead by one)"));
        }
        if let Some(w) = self.check_winner(board) {
            if has_line(board.cells(), w.opponent()) { return invalid("both players have a line".to_string()); }
            let last_mover = if x == o { Player::O } else { Player::X };
            if w != last_mover { return invalid(format!("{w} has a line but {last_mover} moved last")); }
        }
        Ok(())
    }
}

impl Game for TicTacToe {
    type State = Board;
    type Action = Action;

    fn to_move(&self, board: &Board) -> Player {
        if board.count(Cell::X) == board.count(Cell::O) { Player::X } else { Player::O }
    }

    fn actions(&self, board: &Board) -> Vec<Action> { board.empty_cells().collect() }

    fn result(&self, board: &Board, action: Action) -> Result<Board> {
        if board.cell(action) != Cell::Empty { return Err(GameError::InvalidMove { action }); }
        Ok(board.with(action, self.to_move(board).cell()))
    }

    fn is_terminal(&self, board: &Board) -> bool {
        self.check_winner(board).is_some() || board.is_full()
    }

    fn utility(&self, board: &Board, player: Player) -> i32 {
        match self.check_winner(board) {
            Some(w) if w == player => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

/// True when `player` owns any complete line, regardless of scan order.
pub fn has_won(board: &Board, player: Player) -> bool { has_line(board.cells(), player) }
