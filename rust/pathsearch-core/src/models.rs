use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::options::SearchMode;

/// Serializable outcome of one search, successful or not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub mode: SearchMode,
    /// Node labels from start to goal; `None` when the search failed.
    pub path: Option<Vec<String>>,
    pub cost: Option<f64>,
    pub expanded: u64,
    /// Labels in the order they were finalized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visited: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SearchReport {
    pub fn failed(mode: SearchMode, error: &SearchError, expanded: u64, visited: Vec<String>) -> Self {
        Self { mode, path: None, cost: None, expanded, visited, reason: Some(error.reason().to_string()) }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// `S - B - H`, or an empty string when no path was found.
    pub fn path_line(&self) -> String {
        self.path.as_ref().map(|p| p.join(" - ")).unwrap_or_default()
    }
}
