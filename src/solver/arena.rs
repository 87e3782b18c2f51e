use smallvec::SmallVec;

use crate::game::{Board, Move};

pub type NodeId = u32;

/// One search-tree node. Nodes are never mutated after creation;
/// semantically equal boards reached along different paths get
/// distinct nodes.
pub struct Node {
    pub board: Board,
    pub cost: u32,
    pub moved: Option<Move>,
    pub parent: Option<NodeId>,
}

/// Arena-backed storage for the search tree. Parent links are integer
/// handles into the arena, which keeps path reconstruction a plain
/// handle chase.
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// A fresh arena holding only the root node, at cost 0 with no
    /// producing move.
    pub fn root(board: Board) -> (Arena, NodeId) {
        let arena = Arena {
            nodes: vec![Node {
                board,
                cost: 0,
                moved: None,
                parent: None,
            }],
        };
        (arena, 0)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates one child per legal slide from `id`, in `DIRECTIONS`
    /// order, each a fresh copy at `cost + 1`.
    pub fn expand(&mut self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let (cost, children) = {
            let parent = self.get(id);
            (parent.cost + 1, parent.board.successors())
        };
        let mut ids = SmallVec::new();
        for (moved, board) in children {
            let child = self.nodes.len() as NodeId;
            self.nodes.push(Node {
                board,
                cost,
                moved: Some(moved),
                parent: Some(id),
            });
            ids.push(child);
        }
        ids
    }

    /// Move sequence from the root to `id`: walk the parent handles,
    /// collect each producing move, reverse.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            let node = self.get(id);
            if let Some(moved) = node.moved {
                path.push(moved);
            }
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
