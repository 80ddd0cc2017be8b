// Tic-tac-toe rules plus minimax / alpha-beta search
pub mod board;
pub mod error;
pub mod perft;
pub mod play;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use error::{GameError, Result};
