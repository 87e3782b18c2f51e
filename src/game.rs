use serde::{Deserialize, Serialize};

pub mod board;
mod display;


pub use board::{Board, BoardError};

/// The canonical solved arrangement. The blank sits in the top-left corner.
pub const GOAL: [[u8; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// A slide of the blank in one of the four grid directions.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Successor generation order. DFS and BFS tie-breaking depends on it,
/// so it must never be reordered.
pub const DIRECTIONS: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    /// Row and column delta of the blank when sliding in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        }
    }
}
