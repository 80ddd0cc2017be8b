use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

pub const CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self { Cell::Empty => ' ', Cell::X => 'X', Cell::O => 'O' }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self { Cell::Empty => None, Cell::X => Some(Player::X), Cell::O => Some(Player::O) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Player {
    #[value(alias = "X")]
    X,
    #[value(alias = "O")]
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self { Player::X => Player::O, Player::O => Player::X }
    }

    pub fn cell(self) -> Cell {
        match self { Player::X => Cell::X, Player::O => Cell::O }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell().to_char())
    }
}

/// A cell to occupy, numbered 1..=9 row by row from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Action(u8);

impl Action {
    pub fn new(value: u8) -> Result<Self> {
        if (1..=CELLS as u8).contains(&value) { Ok(Self(value)) } else { Err(GameError::InvalidAction { value }) }
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < CELLS);
        Self(idx as u8 + 1)
    }

    pub fn value(self) -> u8 { self.0 }

    /// Zero-based cell index.
    pub fn index(self) -> usize { (self.0 - 1) as usize }
}

impl TryFrom<u8> for Action {
    type Error = GameError;
    fn try_from(value: u8) -> Result<Self> { Action::new(value) }
}

impl From<Action> for u8 {
    fn from(a: Action) -> u8 { a.0 }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Action {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<u8>().map_err(|_| GameError::UnparsableAction { input: s.trim().to_string() })?;
        Action::new(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self { Self::empty() }
}

impl Board {
    pub fn empty() -> Self { Self { cells: [Cell::Empty; CELLS] } }

    pub fn cells(&self) -> &[Cell; CELLS] { &self.cells }

    pub fn cell(&self, action: Action) -> Cell { self.cells[action.index()] }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool { !self.cells.contains(&Cell::Empty) }

    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| **c == Cell::Empty).map(|(i, _)| Action::from_index(i))
    }

    /// Copy of this board with `cell` written at `action`. Callers check occupancy.
    pub(crate) fn with(&self, action: Action, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[action.index()] = cell;
        Self { cells }
    }

    /// Compact nine-character form, empty cells as '.'.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| if *c == Cell::Empty { '.' } else { c.to_char() }).collect()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Accepts nine cells ('X', 'O', or one of " .-_" for empty); '/' and '|' separators are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '/' && *c != '|' && *c != '\n').collect();
        if chars.len() != CELLS {
            return Err(GameError::InvalidBoard { input: s.to_string(), reason: format!("expected {CELLS} cells, got {}", chars.len()) });
        }
        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| GameError::InvalidBoard {
                input: s.to_string(),
                reason: format!("invalid character '{c}' at position {}", i + 1),
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(3).enumerate() {
            if r > 0 { writeln!(f, "--+---+--")?; }
            writeln!(f, "{} | {} | {}", row[0].to_char(), row[1].to_char(), row[2].to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_separators() {
        let b: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(b.encode(), "XO..X...O");
        assert_eq!(b.count(Cell::X), 2);
        assert_eq!(b.count(Cell::O), 2);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!("XO".parse::<Board>(), Err(GameError::InvalidBoard { .. })));
        assert!(matches!("XOZ......".parse::<Board>(), Err(GameError::InvalidBoard { .. })));
    }

    #[test]
    fn action_range() {
        assert!(Action::new(0).is_err());
        assert!(Action::new(10).is_err());
        assert_eq!(Action::new(9).unwrap().index(), 8);
        assert_eq!("5".parse::<Action>().unwrap().value(), 5);
    }

    #[test]
    fn action_parse_errors_name_the_input() {
        let err = " abc ".parse::<Action>().unwrap_err();
        assert!(matches!(&err, GameError::UnparsableAction { input } if input == "abc"));
        assert_eq!(err.to_string(), "invalid action 'abc': expected a cell number 1-9");
        assert!(matches!("12".parse::<Action>(), Err(GameError::InvalidAction { value: 12 })));
    }

    #[test]
    fn display_matches_grid() {
        let b: Board = "XXX......".parse().unwrap();
        assert_eq!(b.to_string(), "X | X | X\n--+---+--\n  |   |  \n--+---+--\n  |   |  \n");
    }
}
