use std::error::Error;
use std::fmt::{self, Display, Formatter};

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Move, DIRECTIONS, GOAL};

/// A grid that is not a permutation of the tiles 0 through 8.
/// Rejected at construction so malformed boards never reach a search.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum BoardError {
    TileOutOfRange(u8),
    DuplicateTile(u8),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::TileOutOfRange(tile) => {
                write!(f, "tile {} is outside the range 0..=8", tile)
            }
            BoardError::DuplicateTile(tile) => write!(f, "tile {} appears more than once", tile),
        }
    }
}

impl Error for BoardError {}

/// One arrangement of the 3x3 puzzle. Equality and hashing are derived
/// from the fields, and `blank` is determined by `tiles`, so two boards
/// compare equal exactly when their tile grids match.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: [[u8; 3]; 3],
    blank: (usize, usize),
}

impl Board {
    /// The only way to build a board from raw tiles. Anything that is
    /// not a permutation of 0..=8 is rejected.
    pub fn new(tiles: [[u8; 3]; 3]) -> Result<Board, BoardError> {
        let mut seen = [false; 9];
        let mut blank = None;
        for (row, line) in tiles.iter().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                if tile > 8 {
                    return Err(BoardError::TileOutOfRange(tile));
                }
                if seen[tile as usize] {
                    return Err(BoardError::DuplicateTile(tile));
                }
                seen[tile as usize] = true;
                if tile == 0 {
                    blank = Some((row, col));
                }
            }
        }
        // nine distinct in-range tiles always include the blank
        let blank = blank.expect("a permutation of 0..=8 contains the blank");
        Ok(Board { tiles, blank })
    }

    pub fn goal() -> Board {
        Board {
            tiles: GOAL,
            blank: (0, 0),
        }
    }

    pub fn tiles(&self) -> &[[u8; 3]; 3] {
        &self.tiles
    }

    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL
    }

    /// Slides the blank one cell in the given direction, producing a
    /// fresh board. `None` when the blank would leave the grid. The
    /// input board is untouched.
    pub fn slide(&self, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.offset();
        let row = self.blank.0 as i32 + dr;
        let col = self.blank.1 as i32 + dc;
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let mut tiles = self.tiles;
        tiles[self.blank.0][self.blank.1] = tiles[row][col];
        tiles[row][col] = 0;
        Some(Board {
            tiles,
            blank: (row, col),
        })
    }

    /// Every legal slide from this board, in `DIRECTIONS` order.
    /// Between two (corner blank) and four (center blank) children.
    pub fn successors(&self) -> SmallVec<[(Move, Board); 4]> {
        DIRECTIONS
            .iter()
            .filter_map(|&mv| self.slide(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Random walk from the solved board. The result is always
    /// solvable, at most `steps` moves from the goal.
    pub fn scrambled<R: Rng>(rng: &mut R, steps: usize) -> Board {
        let mut board = Board::goal();
        let mut applied = 0;
        while applied < steps {
            let mv = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            if let Some(next) = board.slide(mv) {
                board = next;
                applied += 1;
            }
        }
        board
    }
}
