use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use super::arena::{Arena, NodeId};
use super::{SearchResult, Strategy, NODE_CAP};
use crate::game::Board;

/// Frontier entry ordered by cost, then by insertion sequence, so
/// equal-cost entries pop first-in-first-out.
#[derive(Eq, PartialEq)]
struct Entry {
    cost: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.seq).cmp(&(other.cost, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search. All slides cost 1, so this finds the same
/// solution depths as BFS and differs only in frontier bookkeeping.
pub fn search(initial: Board) -> SearchResult {
    let (mut arena, root) = Arena::root(initial);
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    frontier.push(Reverse(Entry {
        cost: 0,
        seq,
        id: root,
    }));
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0;

    while expanded < NODE_CAP {
        let Some(Reverse(entry)) = frontier.pop() else {
            break;
        };
        let current = entry.id;
        expanded += 1;

        if arena.get(current).board.is_goal() {
            let cost = arena.get(current).cost;
            return SearchResult::found(Strategy::Ucs, expanded, cost, arena.path_to(current));
        }

        // Same goal-test-before-visited-check policy as DFS and BFS.
        if !visited.contains(&arena.get(current).board) {
            visited.insert(arena.get(current).board);
            for child in arena.expand(current) {
                seq += 1;
                frontier.push(Reverse(Entry {
                    cost: arena.get(child).cost,
                    seq,
                    id: child,
                }));
            }
        }
    }
    SearchResult::not_found(Strategy::Ucs, expanded)
}
