use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tictactoe_search::board::{Board, Player};
use tictactoe_search::play::{play_game, EngineAgent, HumanAgent, MatchConfig, Mode};
use tictactoe_search::rules::TicTacToe;
use tictactoe_search::search::Algorithm;
use tictactoe_search::GameError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against a minimax engine", long_about = None)]
struct Args {
    /// Search algorithm: minimax (1) or alpha-beta (2)
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Mode: human (1) versus computer, or computer (2) versus computer
    #[arg(long, value_enum, default_value_t = Mode::Human)]
    mode: Mode,

    /// Side played by the human; X always moves first
    #[arg(long, value_enum, default_value_t = Player::X)]
    human: Player,

    /// Starting position, nine cells of X, O or '.' (e.g. "X...O....")
    #[arg(long)]
    board: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = MatchConfig { algorithm: args.algorithm, mode: args.mode, human: args.human };

    let start = match args.board.as_deref() {
        Some(s) => s.parse::<Board>()?,
        None => Board::empty(),
    };
    TicTacToe.validate(&start)?;

    println!("{}", config.describe());

    let mut engine = EngineAgent::new(config.algorithm);
    let mut other = engine;
    let mut human = HumanAgent::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout();
    let outcome = match (config.mode, config.human) {
        (Mode::Human, Player::X) => play_game(start, &mut human, &mut engine, &mut out),
        (Mode::Human, Player::O) => play_game(start, &mut engine, &mut human, &mut out),
        (Mode::Computer, _) => play_game(start, &mut engine, &mut other, &mut out),
    };

    match outcome {
        Ok(_) => {}
        Err(GameError::Aborted) => println!("\nExiting the game."),
        Err(e) => return Err(e.into()),
    }
    out.flush()?;
    Ok(())
}
