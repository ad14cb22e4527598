use super::Value;
use serde::{Deserialize, Serialize};

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Node<V> {
    value: V,
    children: Option<(NodeId, NodeId)>,
}

/// Append-only node storage shared by every version.
///
/// Nodes are never mutated or removed once pushed, so a `NodeId` stays valid
/// (and keeps meaning the same subtree) for the lifetime of the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<V> {
    nodes: Vec<Node<V>>,
}

impl<V: Value> Arena<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn value(&self, node: NodeId) -> V {
        self.nodes[node].value
    }

    pub fn children(&self, node: NodeId) -> Option<(NodeId, NodeId)> {
        self.nodes[node].children
    }

    pub fn leaf(&mut self, value: V) -> NodeId {
        self.push(Node {
            value,
            children: None,
        })
    }

    /// Sum of two nodes' values, `None` on overflow.
    pub fn sum(&self, left: NodeId, right: NodeId) -> Option<V> {
        self.value(left).checked_add(&self.value(right))
    }

    // nothing is pushed when the children's sum overflows
    pub fn branch(&mut self, left: NodeId, right: NodeId) -> Option<NodeId> {
        let value = self.sum(left, right)?;
        Some(self.push(Node {
            value,
            children: Some((left, right)),
        }))
    }

    fn push(&mut self, node: Node<V>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
