pub mod document;
pub mod engine;
pub mod error;
pub mod graph;
pub mod models;
pub mod options;
pub mod samples;

pub use document::{load_graph, save_graph, GraphDocument, NodeSpec};
pub use engine::{format_path, path_cost, Frontier, RecordId, SearchRecord, SearchState, Step, Verdict};
pub use error::{Result, SearchError};
pub use graph::{Graph, Node, NodeId};
pub use models::SearchReport;
pub use options::{SearchMode, SearchOptions, DEFAULT_MAX_EXPANSIONS, DEFAULT_TIMEOUT_MS};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Runs a full search from the graph's start node and summarizes it.
///
/// Search failures (no path, limits) come back as a report with `reason` set;
/// malformed graphs and corrupted chains are returned as errors.
pub fn search(graph: &Graph, options: &SearchOptions) -> Result<SearchReport> {
    let mut state = SearchState::from_graph(graph)?;
    let outcome = state.solve(options);
    let expanded = state.expansions().len() as u64;
    let visited: Vec<String> = state.expansions().iter().map(|e| graph.label(e.node).to_string()).collect();
    let goal = match outcome {
        Ok(goal) => goal,
        Err(e @ (SearchError::EmptyFrontier | SearchError::ExpansionLimit(_) | SearchError::Timeout(_))) => {
            return Ok(SearchReport::failed(options.mode, &e, expanded, visited));
        }
        Err(e) => return Err(e),
    };
    let path = state.reconstruct_path(goal)?;
    let cost = state.record(goal).map(|r| r.g);
    Ok(SearchReport {
        mode: options.mode,
        path: Some(path.iter().map(|&id| graph.label(id).to_string()).collect()),
        cost,
        expanded,
        visited,
        reason: None,
    })
}
