use std::collections::HashSet;

use super::arena::Arena;
use super::{SearchResult, Strategy, NODE_CAP};
use crate::game::Board;

/// Depth-first search. Successors are pushed in `DIRECTIONS` order, so
/// the stack pops them RIGHT, LEFT, DOWN, UP.
pub fn search(initial: Board) -> SearchResult {
    let (mut arena, root) = Arena::root(initial);
    let mut stack = vec![root];
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0;

    while expanded < NODE_CAP {
        let Some(current) = stack.pop() else { break };
        expanded += 1;

        if arena.get(current).board.is_goal() {
            let cost = arena.get(current).cost;
            return SearchResult::found(Strategy::Dfs, expanded, cost, arena.path_to(current));
        }

        // The goal test runs before the visited check: a board reached
        // along two paths can be expanded twice before either entry is
        // recorded. The guard only stops re-expansion of boards that
        // were already expanded.
        if !visited.contains(&arena.get(current).board) {
            visited.insert(arena.get(current).board);
            for child in arena.expand(current) {
                stack.push(child);
            }
        }
    }
    SearchResult::not_found(Strategy::Dfs, expanded)
}
