use super::arena::{Arena, NodeId};
use super::{SearchResult, Strategy, NODE_CAP};
use crate::game::Board;

/// Iterative-deepening depth-first search: a depth-limited recursive
/// DFS with no visited set, rerun for limit 0, 1, 2, … . One expansion
/// counter accumulates across every recursive call and every limit;
/// reaching the cap aborts the whole search instead of trying deeper.
pub fn search(initial: Board) -> SearchResult {
    let (mut arena, root) = Arena::root(initial);
    let mut expanded = 0;

    for limit in 0.. {
        if let Some(goal) = depth_limited(&mut arena, root, limit, &mut expanded) {
            let cost = arena.get(goal).cost;
            return SearchResult::found(Strategy::Idfs, expanded, cost, arena.path_to(goal));
        }
        if expanded >= NODE_CAP {
            break;
        }
    }
    SearchResult::not_found(Strategy::Idfs, expanded)
}

/// Every call counts as one expansion. The goal is only tested once
/// the limit is spent; a shallower goal is found by an earlier
/// iteration. No deduplication: the same board can be expanded many
/// times across branches and limits.
fn depth_limited(
    arena: &mut Arena,
    id: NodeId,
    limit: usize,
    expanded: &mut usize,
) -> Option<NodeId> {
    if *expanded >= NODE_CAP {
        return None;
    }
    *expanded += 1;

    if limit == 0 {
        return arena.get(id).board.is_goal().then_some(id);
    }
    for child in arena.expand(id) {
        if let Some(goal) = depth_limited(arena, child, limit - 1, expanded) {
            return Some(goal);
        }
    }
    None
}
