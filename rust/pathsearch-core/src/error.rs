use thiserror::Error;

use crate::options::SearchMode;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The frontier ran dry before any goal node was popped.
    #[error("no path: frontier exhausted without reaching a goal")]
    EmptyFrontier,
    /// A predecessor chain did not end at a start-flagged node.
    #[error("broken predecessor chain at node {node}")]
    BrokenChain { node: String },
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("invalid heuristic {value} for node {node}")]
    InvalidHeuristic { node: String, value: f64 },
    #[error("duplicate node id {0}")]
    DuplicateNode(String),
    #[error("unknown node {0}")]
    UnknownNode(String),
    #[error("graph has no start node")]
    MissingStart,
    #[error("graph has more than one start node: {0:?}")]
    MultipleStarts(Vec<String>),
    #[error("node {0} is not flagged as start")]
    NotStart(String),
    #[error("expansion limit of {0} reached")]
    ExpansionLimit(u64),
    #[error("search timed out after {0}ms")]
    Timeout(u64),
    /// `solve` asked for a mode other than the one expansion already started under.
    #[error("search already running as {active}, cannot switch to {requested}")]
    ModeMismatch { requested: SearchMode, active: SearchMode },
    #[error("graph document: {0}")]
    Document(String),
}

impl SearchError {
    /// Short machine-readable code, used as the `reason` of a failed report.
    pub fn reason(&self) -> &'static str {
        match self {
            SearchError::EmptyFrontier => "empty-frontier",
            SearchError::BrokenChain { .. } => "broken-chain",
            SearchError::InvalidWeight { .. } => "invalid-weight",
            SearchError::InvalidHeuristic { .. } => "invalid-heuristic",
            SearchError::DuplicateNode(_) => "duplicate-node",
            SearchError::UnknownNode(_) => "unknown-node",
            SearchError::MissingStart => "missing-start",
            SearchError::MultipleStarts(_) => "multiple-starts",
            SearchError::NotStart(_) => "not-start",
            SearchError::ExpansionLimit(_) => "expansion-limit",
            SearchError::Timeout(_) => "timeout",
            SearchError::ModeMismatch { .. } => "mode-mismatch",
            SearchError::Document(_) => "document",
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Document(e.to_string())
    }
}
