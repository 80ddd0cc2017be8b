use clap::Parser;
use std::path::PathBuf;
use tictactoe_search::search::Algorithm;
use tictactoe_search::selfplay::{generate_games, tally, write_jsonl, SelfPlayParams};

#[derive(Parser, Debug)]
#[command(name = "ttt-selfplay", about = "Generate engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 2)]
    random_plies: usize,
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    x_algorithm: Algorithm,
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    o_algorithm: Algorithm,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        random_plies: a.random_plies,
        x_algorithm: a.x_algorithm,
        o_algorithm: a.o_algorithm,
        seed: a.seed,
    };
    eprintln!("Generating {} games (random_plies={}, x={:?}, o={:?}, seed={})", a.games, a.random_plies, a.x_algorithm, a.o_algorithm, a.seed);
    let games = generate_games(&params)?;
    let (x, o, d) = tally(&games);
    eprintln!("X wins: {x}  O wins: {o}  draws: {d}");
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
