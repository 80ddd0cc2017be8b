use clap::Parser;
use std::time::Instant;
use tictactoe_search::board::Board;
use tictactoe_search::perft::{perft, perft_parallel};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the tic-tac-toe move generator")]
struct Args {
    /// Depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board (nine cells of X, O or '.') or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let base = if args.board == "empty" { Board::empty() } else { args.board.parse::<Board>()? };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| -> anyhow::Result<(u64, f64)> {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 { perft(&base, args.depth)? } else { perft_parallel(&base, args.depth)? };
        Ok((nodes, t0.elapsed().as_secs_f64()))
    })?;

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
