use std::io::{BufRead, Write};

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};
use crate::error::{GameError, Result};
use crate::rules::{Game, TicTacToe};
use crate::search::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub action: Action,
    /// Search tree nodes generated, for engine moves.
    pub nodes: Option<u64>,
}

pub trait Agent {
    fn select(&mut self, board: &Board) -> Result<Selection>;
}

#[derive(Debug, Clone, Copy)]
pub struct EngineAgent {
    pub algorithm: Algorithm,
}

impl EngineAgent {
    pub fn new(algorithm: Algorithm) -> Self { Self { algorithm } }
}

impl Agent for EngineAgent {
    fn select(&mut self, board: &Board) -> Result<Selection> {
        let res = self.algorithm.search(&TicTacToe, board)?;
        let action = res.bestmove.ok_or(GameError::NoLegalMoves)?;
        Ok(Selection { action, nodes: Some(res.nodes) })
    }
}

/// Reads moves from `input`, prompting on `output`. Entering 0 or closing input aborts.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self { Self { input, output } }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select(&mut self, board: &Board) -> Result<Selection> {
        let game = TicTacToe;
        let moves = game.actions(board);
        let listed: Vec<String> = moves.iter().map(|a| a.to_string()).collect();
        loop {
            writeln!(self.output, "{}'s move. What is your move (possible moves at the moment are: [{}] | enter 0 to exit the game)?", game.to_move(board), listed.join(", "))?;
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 { return Err(GameError::Aborted); }
            let line = line.trim();
            if line == "0" { return Err(GameError::Aborted); }
            match line.parse::<i64>() {
                Ok(n) => match moves.iter().find(|a| i64::from(a.value()) == n) {
                    Some(&action) => return Ok(Selection { action, nodes: None }),
                    None => writeln!(self.output, "Invalid move. Please select a valid move from the list.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Human versus computer
    #[value(alias = "1")]
    Human,
    /// Computer versus computer
    #[value(alias = "2")]
    Computer,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub algorithm: Algorithm,
    pub mode: Mode,
    /// Side played by the human in `Mode::Human`. X always moves first.
    pub human: Player,
}

impl MatchConfig {
    pub fn describe(&self) -> String {
        let mode = match (self.mode, self.human) {
            (Mode::Human, Player::X) => "human (X) versus computer (O)",
            (Mode::Human, Player::O) => "computer (X) versus human (O)",
            (Mode::Computer, _) => "computer (X) versus computer (O)",
        };
        format!("Algorithm: {}\nFirst: X\nMode: {}", self.algorithm, mode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Action>,
    /// Nodes generated per move, `None` for human moves.
    pub nodes: Vec<Option<u64>>,
    pub winner: Option<Player>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn new(start: Board) -> Self {
        Self { moves: Vec::new(), nodes: Vec::new(), winner: None, final_board: start }
    }
}

/// Play from `start` until the board is terminal, rendering each ply to `out`.
pub fn play_game(start: Board, x: &mut dyn Agent, o: &mut dyn Agent, out: &mut dyn Write) -> Result<GameRecord> {
    let game = TicTacToe;
    let mut board = start;
    let mut record = GameRecord::new(start);
    write!(out, "{}", board)?;
    while !game.is_terminal(&board) {
        let mover = game.to_move(&board);
        let agent: &mut dyn Agent = match mover { Player::X => &mut *x, Player::O => &mut *o };
        let sel = agent.select(&board)?;
        board = game.result(&board, sel.action)?;
        if let Some(n) = sel.nodes {
            writeln!(out, "{}'s selected move: {}. Number of search tree nodes generated: {}", mover, sel.action, n)?;
        }
        write!(out, "{}", board)?;
        record.moves.push(sel.action);
        record.nodes.push(sel.nodes);
    }
    record.winner = game.check_winner(&board);
    record.final_board = board;
    match record.winner {
        Some(w) => writeln!(out, "The winner is {}!", w)?,
        None => writeln!(out, "The game is a draw.")?,
    }
    info!("game over: board={} winner={:?} plies={}", board.encode(), record.winner, record.moves.len());
    Ok(record)
}
