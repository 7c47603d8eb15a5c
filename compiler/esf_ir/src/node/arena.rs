//! Flat storage for syntax nodes.

use std::ops::Index;

use super::{Node, NodeId};

/// Arena holding every node of one parsed document.
///
/// Nodes are allocated bottom-up by the parser, so a parent always has a
/// larger id than its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a node and return its handle.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let Ok(index) = u32::try_from(self.nodes.len()) else {
            panic!("node arena exceeded u32::MAX entries");
        };
        self.nodes.push(node);
        NodeId::new(index)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node handles reachable from `root`, parents before children,
    /// children in source order.
    ///
    /// Iterative, so arbitrarily deep trees cannot overflow the stack.
    pub fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
