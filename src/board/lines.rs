use super::grid::{Cell, Player, CELLS};

/// Rows, then columns, then diagonals. Winner lookup scans in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// Owner of the first complete line, if any.
pub fn first_winner(cells: &[Cell; CELLS]) -> Option<Player> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] { cells[a].player() } else { None }
    })
}

pub fn has_line(cells: &[Cell; CELLS], player: Player) -> bool {
    let target = player.cell();
    WIN_LINES.iter().any(|line| line.iter().all(|&i| cells[i] == target))
}
