use itertools::Itertools;

use crate::error::{Result, SearchError};
use crate::graph::{Graph, NodeId};

use super::search::{RecordId, SearchState};

impl<'g> SearchState<'g> {
    /// Walks predecessor links back from `goal` and returns the node sequence
    /// start first. The chain must end at a start-flagged node.
    pub fn reconstruct_path(&self, goal: RecordId) -> Result<Vec<NodeId>> {
        let graph = self.graph();
        let broken = |id: RecordId| SearchError::BrokenChain {
            node: self
                .record(id)
                .map(|r| graph.label(r.node).to_string())
                .unwrap_or_else(|| format!("record #{}", id.0)),
        };

        let mut path = Vec::new();
        let mut cur = goal;
        loop {
            let rec = self.record(cur).ok_or_else(|| broken(cur))?;
            path.push(rec.node);
            // Longer than the arena means the links loop.
            if path.len() > self.records_len() {
                return Err(broken(cur));
            }
            match rec.predecessor {
                Some(prev) => cur = prev,
                None if graph.node(rec.node).is_start => break,
                None => return Err(broken(cur)),
            }
        }
        path.reverse();
        Ok(path)
    }
}

/// Sum of edge weights along `path`. Consecutive nodes must be adjacent.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Result<f64> {
    path.iter().tuple_windows().try_fold(0.0, |acc, (&a, &b)| {
        graph
            .node(a)
            .weight_to(b)
            .map(|w| acc + w)
            .ok_or_else(|| SearchError::BrokenChain { node: graph.label(b).to_string() })
    })
}

/// Labels joined as `S - B - H`.
pub fn format_path(graph: &Graph, path: &[NodeId]) -> String {
    path.iter().map(|&id| graph.label(id)).join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::search::SearchRecord;
    use crate::options::SearchOptions;

    fn diamond() -> Graph {
        let mut g = Graph::new();
        let s = g.add_node("s").unwrap();
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        let t = g.add_node("t").unwrap();
        g.set_neighbors(s, [(a, 1.0), (b, 4.0)]).unwrap();
        g.set_neighbors(a, [(t, 5.0)]).unwrap();
        g.set_neighbors(b, [(t, 1.0)]).unwrap();
        g.mark_start(s).unwrap();
        g.mark_goal(t).unwrap();
        g
    }

    #[test]
    fn path_is_start_first_and_complete() {
        let g = diamond();
        let mut state = SearchState::from_graph(&g).unwrap();
        let goal = state.solve(&SearchOptions::uniform_cost()).unwrap();
        let path = state.reconstruct_path(goal).unwrap();
        let labels: Vec<&str> = path.iter().map(|&id| g.label(id)).collect();
        assert_eq!(labels, vec!["s", "b", "t"]);
        assert_eq!(path_cost(&g, &path).unwrap(), 5.0);
        assert_eq!(format_path(&g, &path), "s - b - t");
    }

    #[test]
    fn chain_not_ending_at_start_is_broken() {
        let g = diamond();
        let a = g.require("a").unwrap();
        let t = g.require("t").unwrap();
        let mut state = SearchState::from_graph(&g).unwrap();
        // Orphan chain rooted at a node without the start flag.
        state.records.push(SearchRecord { node: a, g: 1.0, h: 0.0, predecessor: None });
        state.records.push(SearchRecord { node: t, g: 6.0, h: 0.0, predecessor: Some(RecordId(1)) });
        assert_eq!(state.reconstruct_path(RecordId(2)), Err(SearchError::BrokenChain { node: "a".into() }));
        assert!(matches!(state.reconstruct_path(RecordId(99)), Err(SearchError::BrokenChain { .. })));
    }

    #[test]
    fn looping_chain_is_broken() {
        let g = diamond();
        let a = g.require("a").unwrap();
        let b = g.require("b").unwrap();
        let mut state = SearchState::from_graph(&g).unwrap();
        state.records.push(SearchRecord { node: a, g: 1.0, h: 0.0, predecessor: Some(RecordId(2)) });
        state.records.push(SearchRecord { node: b, g: 2.0, h: 0.0, predecessor: Some(RecordId(1)) });
        assert!(matches!(state.reconstruct_path(RecordId(2)), Err(SearchError::BrokenChain { .. })));
    }

    #[test]
    fn path_cost_rejects_non_adjacent_steps() {
        let g = diamond();
        let s = g.require("s").unwrap();
        let t = g.require("t").unwrap();
        assert!(matches!(path_cost(&g, &[s, t]), Err(SearchError::BrokenChain { .. })));
        assert_eq!(path_cost(&g, &[s]).unwrap(), 0.0);
    }
}
