use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::error::{Result, SearchError};
use crate::graph::{Graph, NodeId};
use crate::options::{SearchMode, SearchOptions};

use super::frontier::{Entry, Frontier, Offer};

/// Index of a record in the [`SearchState`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

/// One discovered path to a node. Immutable once pushed into the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    pub node: NodeId,
    pub g: f64,
    pub h: f64,
    pub predecessor: Option<RecordId>,
}

/// A node popped from the frontier, in expansion order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
    pub node: NodeId,
    pub priority: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// `record` was finalized and its neighbors offered to the frontier.
    Expanded(RecordId),
    /// A goal node was popped.
    Goal(RecordId),
}

/// Open/closed bookkeeping for a single search over a borrowed graph.
pub struct SearchState<'g> {
    graph: &'g Graph,
    mode: SearchMode,
    pub(super) records: Vec<SearchRecord>,
    frontier: Frontier,
    visited: FxHashSet<NodeId>,
    expansions: Vec<Expansion>,
    goal: Option<RecordId>,
}

impl<'g> SearchState<'g> {
    /// Seeds the frontier with `start` at `g = 0`.
    pub fn new(graph: &'g Graph, start: NodeId) -> Result<Self> {
        let node = graph
            .get(start)
            .ok_or_else(|| SearchError::UnknownNode(format!("#{}", start.index())))?;
        if !node.is_start {
            return Err(SearchError::NotStart(node.label.clone()));
        }
        let mut state = SearchState {
            graph,
            mode: SearchMode::default(),
            records: Vec::with_capacity(graph.len()),
            frontier: Frontier::new(),
            visited: FxHashSet::default(),
            expansions: Vec::new(),
            goal: None,
        };
        state.seed(start);
        Ok(state)
    }

    /// Seeds from the graph's single start-flagged node.
    pub fn from_graph(graph: &'g Graph) -> Result<Self> {
        Self::new(graph, graph.start()?)
    }

    fn seed(&mut self, start: NodeId) {
        let h = self.h(start);
        self.records.push(SearchRecord { node: start, g: 0.0, h, predecessor: None });
        let priority = self.mode.priority(0.0, h);
        self.frontier.insert_ordered(Entry::new(RecordId(0), start, priority));
    }

    /// Switches the priority function and re-seeds. Fails with `ModeMismatch` once
    /// expansion has started under a different mode.
    pub fn set_mode(&mut self, mode: SearchMode) -> Result<()> {
        if self.mode == mode {
            return Ok(());
        }
        if !self.expansions.is_empty() {
            return Err(SearchError::ModeMismatch { requested: mode, active: self.mode });
        }
        let start = self.records[0].node;
        self.mode = mode;
        self.records.clear();
        self.frontier.clear();
        self.seed(start);
        Ok(())
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Popped nodes in the order they were finalized.
    pub fn expansions(&self) -> &[Expansion] {
        &self.expansions
    }

    pub fn record(&self, id: RecordId) -> Option<&SearchRecord> {
        self.records.get(id.0)
    }

    pub fn records_len(&self) -> usize {
        self.records.len()
    }

    /// The goal record, once a goal has been popped.
    pub fn goal(&self) -> Option<RecordId> {
        self.goal
    }

    fn h(&self, node: NodeId) -> f64 {
        if self.mode.uses_heuristic() {
            self.graph.node(node).h()
        } else {
            0.0
        }
    }

    /// Pops the frontier head, finalizes it and offers its unvisited neighbors.
    pub fn step(&mut self) -> Result<Step> {
        if let Some(goal) = self.goal {
            return Ok(Step::Goal(goal));
        }
        let head = self.frontier.pop_front().ok_or(SearchError::EmptyFrontier)?;
        let current = self.records[head.record.0];
        self.visited.insert(head.node);
        self.expansions.push(Expansion { node: head.node, priority: head.priority });

        let graph = self.graph;
        let node = graph.node(head.node);
        debug!(node = %node.label, g = current.g, f = head.priority, open = self.frontier.len(), "expand");
        if node.is_goal {
            self.goal = Some(head.record);
            return Ok(Step::Goal(head.record));
        }

        for (&next, &weight) in node.neighbors.iter() {
            if self.visited.contains(&next) {
                continue;
            }
            let g = current.g + weight;
            let h = self.h(next);
            let id = RecordId(self.records.len());
            let candidate = SearchRecord { node: next, g, h, predecessor: Some(head.record) };
            match self.frontier.offer(Entry::new(id, next, self.mode.priority(g, h))) {
                Offer::Inserted => self.records.push(candidate),
                Offer::Replaced { stale } => {
                    debug!(node = %graph.label(next), stale = stale.0, g, "replace");
                    self.records.push(candidate);
                }
                Offer::Discarded => {}
            }
        }
        Ok(Step::Expanded(head.record))
    }

    /// Expands until a goal is popped. Returns the goal record.
    pub fn solve(&mut self, options: &SearchOptions) -> Result<RecordId> {
        self.set_mode(options.mode)?;
        let started = Instant::now();
        loop {
            if self.goal.is_none() {
                if self.expansions.len() as u64 >= options.max_expansions {
                    info!(expanded = self.expansions.len(), "expansion limit reached");
                    return Err(SearchError::ExpansionLimit(options.max_expansions));
                }
                if options.timeout_ms > 0 && started.elapsed().as_millis() as u64 >= options.timeout_ms {
                    info!(expanded = self.expansions.len(), "search timed out");
                    return Err(SearchError::Timeout(options.timeout_ms));
                }
            }
            match self.step() {
                Ok(Step::Expanded(_)) => continue,
                Ok(Step::Goal(goal)) => {
                    let r = self.records[goal.0];
                    info!(
                        mode = %self.mode,
                        goal = %self.graph.label(r.node),
                        cost = r.g,
                        expanded = self.expansions.len(),
                        "goal reached"
                    );
                    return Ok(goal);
                }
                Err(e) => {
                    info!(mode = %self.mode, expanded = self.expansions.len(), error = %e, "search failed");
                    return Err(e);
                }
            }
        }
    }
}
