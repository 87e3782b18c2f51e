use std::collections::{HashSet, VecDeque};

use super::arena::Arena;
use super::{SearchResult, Strategy, NODE_CAP};
use crate::game::Board;

/// Breadth-first search: the same loop as DFS with a queue in place of
/// the stack, giving level-order exploration.
pub fn search(initial: Board) -> SearchResult {
    let (mut arena, root) = Arena::root(initial);
    let mut queue = VecDeque::new();
    queue.push_back(root);
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0;

    while expanded < NODE_CAP {
        let Some(current) = queue.pop_front() else { break };
        expanded += 1;

        if arena.get(current).board.is_goal() {
            let cost = arena.get(current).cost;
            return SearchResult::found(Strategy::Bfs, expanded, cost, arena.path_to(current));
        }

        // Same goal-test-before-visited-check policy as DFS.
        if !visited.contains(&arena.get(current).board) {
            visited.insert(arena.get(current).board);
            for child in arena.expand(current) {
                queue.push_back(child);
            }
        }
    }
    SearchResult::not_found(Strategy::Bfs, expanded)
}
