use clap::Parser;
use std::time::Instant;
use tictactoe_search::board::Board;
use tictactoe_search::rules::TicTacToe;
use tictactoe_search::search::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "ttt-bench", version, about = "Compare minimax and alpha-beta node counts and timing")]
struct Args {
    /// Board (nine cells of X, O or '.') or "empty"
    #[arg(long, default_value = "empty")]
    board: String,

    /// Repetitions per algorithm
    #[arg(long, default_value_t = 1)]
    iters: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "empty" { Board::empty() } else { args.board.parse::<Board>()? };
    let iters = args.iters.max(1);

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let t0 = Instant::now();
        let mut res = algorithm.search(&TicTacToe, &board)?;
        for _ in 1..iters { res = algorithm.search(&TicTacToe, &board)?; }
        let dt = t0.elapsed().as_secs_f64() / iters as f64;
        let nps = if dt > 0.0 { res.nodes as f64 / dt } else { 0.0 };
        let best = res.bestmove.map(|a| a.to_string()).unwrap_or_else(|| "(none)".to_string());
        println!("{:<8} bestmove={} value={} nodes={} cutoffs={} elapsed={:.4}s nps={:.1}",
            format!("{:?}", algorithm), best, res.value, res.nodes, res.cutoffs, dt, nps);
    }
    Ok(())
}
