//! JSON graph documents.
//!
//! ```json
//! { "nodes": [
//!     { "id": "S", "heuristic": 9, "start": true, "neighbors": { "A": 7, "B": 2 } },
//!     { "id": "A", "goal": true }
//! ] }
//! ```
//!
//! Neighbor order in the document is the expansion order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::graph::Graph;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub start: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub goal: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub neighbors: IndexMap<String, f64>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeSpec>,
}

impl GraphDocument {
    /// Builds a validated graph. Nodes are created first so edges may point forward.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for spec in &self.nodes {
            let id = graph.add_node(spec.id.clone())?;
            if let Some(h) = spec.heuristic {
                graph.set_heuristic(id, h)?;
            }
            if spec.start {
                graph.mark_start(id)?;
            }
            if spec.goal {
                graph.mark_goal(id)?;
            }
        }
        for spec in &self.nodes {
            let from = graph.require(&spec.id)?;
            let edges = spec
                .neighbors
                .iter()
                .map(|(to, &w)| graph.require(to).map(|id| (id, w)))
                .collect::<Result<Vec<_>>>()?;
            graph.set_neighbors(from, edges)?;
        }
        debug!(nodes = graph.len(), "built graph from document");
        Ok(graph)
    }

    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .iter()
            .map(|n| NodeSpec {
                id: n.label.clone(),
                heuristic: n.heuristic,
                start: n.is_start,
                goal: n.is_goal,
                neighbors: n.neighbors.iter().map(|(&to, &w)| (graph.label(to).to_string(), w)).collect(),
            })
            .collect();
        Self { nodes }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .map_err(|e| SearchError::Document(format!("reading {}: {e}", path.display())))?;
    GraphDocument::from_json(&text)?.build()
}

pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    let text = GraphDocument::from_graph(graph).to_json_pretty()?;
    fs::write(path, text).map_err(|e| SearchError::Document(format!("writing {}: {e}", path.display())))
}
