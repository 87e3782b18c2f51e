use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::game::{Board, Move};

pub mod arena;

pub mod bfs;
pub mod dfs;
pub mod idfs;
pub mod ucs;

/// Expansion ceiling per strategy run. The only timeout mechanism,
/// measured in expansions rather than wall time.
pub const NODE_CAP: usize = 10_000;

#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub enum Strategy {
    Dfs,
    Bfs,
    Idfs,
    Ucs,
}

impl Strategy {
    /// Fixed report order.
    pub const ALL: [Strategy; 4] = [Strategy::Dfs, Strategy::Bfs, Strategy::Idfs, Strategy::Ucs];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::Bfs => "BFS",
            Strategy::Idfs => "IDFS",
            Strategy::Ucs => "UCS",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Summary of one strategy run. Exhaustion is an ordinary value:
/// `cost` is -1 and `path` is `None` when no solution was found.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub nodes_expanded: usize,
    pub cost: i64,
    pub path: Option<Vec<Move>>,
}

impl SearchResult {
    pub(crate) fn found(
        strategy: Strategy,
        nodes_expanded: usize,
        cost: u32,
        path: Vec<Move>,
    ) -> SearchResult {
        SearchResult {
            strategy,
            nodes_expanded,
            cost: cost as i64,
            path: Some(path),
        }
    }

    pub(crate) fn not_found(strategy: Strategy, nodes_expanded: usize) -> SearchResult {
        SearchResult {
            strategy,
            nodes_expanded,
            cost: -1,
            path: None,
        }
    }
}

pub fn solve(strategy: Strategy, board: &Board) -> SearchResult {
    match strategy {
        Strategy::Dfs => dfs::search(*board),
        Strategy::Bfs => bfs::search(*board),
        Strategy::Idfs => idfs::search(*board),
        Strategy::Ucs => ucs::search(*board),
    }
}

/// Runs all four strategies in report order. Each run owns its own
/// arena, frontier and visited set; nothing is shared between them.
pub fn solve_all(board: &Board) -> Vec<SearchResult> {
    Strategy::ALL
        .iter()
        .map(|&strategy| solve(strategy, board))
        .collect()
}
