use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tictactoe_search::board::Board;
use tictactoe_search::perft::perft;
use tictactoe_search::rules::TicTacToe;
use tictactoe_search::search::{alpha_beta_search, minimax_search};

fn bench_search(c: &mut Criterion) {
    let empty = Board::empty();
    let mid: Board = "X...O....".parse().expect("valid board");
    c.bench_function("minimax_empty", |ben| {
        ben.iter(|| black_box(minimax_search(&TicTacToe, black_box(&empty)).expect("search").nodes))
    });
    c.bench_function("alphabeta_empty", |ben| {
        ben.iter(|| black_box(alpha_beta_search(&TicTacToe, black_box(&empty)).expect("search").nodes))
    });
    c.bench_function("minimax_mid", |ben| {
        ben.iter(|| black_box(minimax_search(&TicTacToe, black_box(&mid)).expect("search").nodes))
    });
    c.bench_function("alphabeta_mid", |ben| {
        ben.iter(|| black_box(alpha_beta_search(&TicTacToe, black_box(&mid)).expect("search").nodes))
    });
}

fn bench_perft(c: &mut Criterion) {
    let b = Board::empty();
    c.bench_function("perft_9_empty", |ben| ben.iter(|| black_box(perft(black_box(&b), 9).expect("perft"))));
}

criterion_group!(benches, bench_search, bench_perft);
criterion_main!(benches);
