pub mod grid;
pub mod lines;

pub use grid::{Action, Board, Cell, Player, CELLS};
pub use lines::WIN_LINES;
