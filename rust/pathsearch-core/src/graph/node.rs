use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Index of a node inside its owning [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Static description of a node. Per-search distances and back-pointers live in
/// [`SearchRecord`](crate::engine::SearchRecord)s, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// h(n), estimated remaining cost to a goal. `None` is read as 0.
    pub heuristic: Option<f64>,
    pub is_start: bool,
    pub is_goal: bool,
    /// Outgoing edges in insertion order; that order is the expansion order.
    pub neighbors: IndexMap<NodeId, f64>,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            heuristic: None,
            is_start: false,
            is_goal: false,
            neighbors: IndexMap::new(),
        }
    }

    pub fn h(&self) -> f64 {
        self.heuristic.unwrap_or(0.0)
    }

    pub fn weight_to(&self, other: NodeId) -> Option<f64> {
        self.neighbors.get(&other).copied()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.label)
    }
}
