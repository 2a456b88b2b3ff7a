pub mod node;

pub use node::{Node, NodeId};

use rustc_hash::FxHashMap;

use crate::error::{Result, SearchError};

/// Arena of nodes addressed by [`NodeId`], with a label index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_label: FxHashMap<String, NodeId>,
}

fn valid_cost(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            by_label: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Adds a node with default bookkeeping (no flags, no heuristic, no edges).
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId> {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return Err(SearchError::DuplicateNode(label));
        }
        let id = NodeId(self.nodes.len());
        self.by_label.insert(label.clone(), id);
        self.nodes.push(Node::new(id, label));
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// # Panics
    /// If `id` was not produced by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.node(id).label
    }

    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    pub fn require(&self, label: &str) -> Result<NodeId> {
        self.find(label).ok_or_else(|| SearchError::UnknownNode(label.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| SearchError::UnknownNode(format!("#{}", id.index())))
    }

    fn check_edge(&self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        let from_label = self
            .get(from)
            .map(|n| n.label.clone())
            .ok_or_else(|| SearchError::UnknownNode(format!("#{}", from.index())))?;
        let to_label = self
            .get(to)
            .map(|n| n.label.clone())
            .ok_or_else(|| SearchError::UnknownNode(format!("#{}", to.index())))?;
        if !valid_cost(weight) {
            return Err(SearchError::InvalidWeight { from: from_label, to: to_label, weight });
        }
        Ok(())
    }

    /// Replaces the adjacency of `id`. All edges are validated before anything is
    /// written, so a rejected call leaves the node untouched.
    pub fn set_neighbors<I>(&mut self, id: NodeId, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (NodeId, f64)>,
    {
        let edges: Vec<(NodeId, f64)> = edges.into_iter().collect();
        for &(to, w) in &edges {
            self.check_edge(id, to, w)?;
        }
        let node = self.node_mut(id)?;
        node.neighbors.clear();
        node.neighbors.extend(edges);
        Ok(())
    }

    /// Adds or overwrites the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.node_mut(from)?.neighbors.insert(to, weight);
        Ok(())
    }

    /// Adds the edge in both directions.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn set_heuristic(&mut self, id: NodeId, value: f64) -> Result<()> {
        let node = self.node_mut(id)?;
        if !valid_cost(value) {
            return Err(SearchError::InvalidHeuristic { node: node.label.clone(), value });
        }
        node.heuristic = Some(value);
        Ok(())
    }

    pub fn mark_start(&mut self, id: NodeId) -> Result<()> {
        self.node_mut(id)?.is_start = true;
        Ok(())
    }

    pub fn mark_goal(&mut self, id: NodeId) -> Result<()> {
        self.node_mut(id)?.is_goal = true;
        Ok(())
    }

    pub fn starts(&self) -> Vec<NodeId> {
        self.nodes.iter().filter(|n| n.is_start).map(|n| n.id).collect()
    }

    pub fn goals(&self) -> Vec<NodeId> {
        self.nodes.iter().filter(|n| n.is_goal).map(|n| n.id).collect()
    }

    /// The single start-flagged node.
    pub fn start(&self) -> Result<NodeId> {
        let starts = self.starts();
        match starts.as_slice() {
            [] => Err(SearchError::MissingStart),
            [only] => Ok(*only),
            many => Err(SearchError::MultipleStarts(
                many.iter().map(|&id| self.label(id).to_string()).collect(),
            )),
        }
    }
}
