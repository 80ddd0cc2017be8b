use rayon::prelude::*;

use crate::board::Board;
use crate::error::Result;
use crate::rules::{Game, TicTacToe};

// Positions exactly `depth` plies below `board`; finished games stop contributing.
pub fn perft(board: &Board, depth: u32) -> Result<u64> {
    if depth == 0 { return Ok(1); }
    let game = TicTacToe;
    if game.is_terminal(board) { return Ok(0); }
    let mut nodes = 0u64;
    for a in game.actions(board) {
        let child = game.result(board, a)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

// Root-split across the current rayon pool
pub fn perft_parallel(board: &Board, depth: u32) -> Result<u64> {
    let game = TicTacToe;
    if depth == 0 || game.is_terminal(board) { return perft(board, depth); }
    let children = game.actions(board).into_iter().map(|a| game.result(board, a)).collect::<Result<Vec<_>>>()?;
    children.par_iter().map(|child| perft(child, depth - 1)).sum()
}

/// Every position in the tree under `board`, root included.
pub fn tree_size(board: &Board) -> Result<u64> {
    let game = TicTacToe;
    let mut nodes = 1u64;
    if game.is_terminal(board) { return Ok(nodes); }
    for a in game.actions(board) {
        nodes += tree_size(&game.result(board, a)?)?;
    }
    Ok(nodes)
}
