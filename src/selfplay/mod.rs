use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player};
use crate::error::{GameError, Result};
use crate::play::GameRecord;
use crate::rules::{Game, TicTacToe};
use crate::search::Algorithm;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub random_plies: usize, // uniformly random opening plies before search takes over
    pub x_algorithm: Algorithm,
    pub o_algorithm: Algorithm,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, random_plies: 2, x_algorithm: Algorithm::AlphaBeta, o_algorithm: Algorithm::AlphaBeta, seed: 42 }
    }
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    let game = TicTacToe;
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let mut board = Board::empty();
        let mut record = GameRecord::new(board);
        let mut plies = 0usize;
        while !game.is_terminal(&board) {
            let (action, nodes) = if plies < params.random_plies {
                let moves = game.actions(&board);
                (moves[rng.gen_range(0..moves.len())], None)
            } else {
                let algorithm = match game.to_move(&board) {
                    Player::X => params.x_algorithm,
                    Player::O => params.o_algorithm,
                };
                let res = algorithm.search(&game, &board)?;
                (res.bestmove.ok_or(GameError::NoLegalMoves)?, Some(res.nodes))
            };
            board = game.result(&board, action)?;
            record.moves.push(action);
            record.nodes.push(nodes);
            plies += 1;
        }
        record.winner = game.check_winner(&board);
        record.final_board = board;
        debug!("selfplay game {}: {} winner={:?}", gi, board.encode(), record.winner);
        games.push(record);
    }
    info!("generated {} games (seed={}, random_plies={})", games.len(), params.seed, params.random_plies);
    Ok(games)
}

/// Wins for X, wins for O, draws.
pub fn tally(games: &[GameRecord]) -> (usize, usize, usize) {
    games.iter().fold((0, 0, 0), |(x, o, d), g| match g.winner {
        Some(Player::X) => (x + 1, o, d),
        Some(Player::O) => (x, o + 1, d),
        None => (x, o, d + 1),
    })
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() { create_dir_all(parent)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        out.push(serde_json::from_str(l)?);
    }
    Ok(out)
}
