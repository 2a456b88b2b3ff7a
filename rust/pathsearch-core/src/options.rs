use std::env;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Priority function used to order the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Dijkstra: `f(n) = g(n)`.
    #[serde(alias = "dijkstra")]
    UniformCost,
    /// A*: `f(n) = g(n) + h(n)`.
    #[default]
    #[serde(alias = "astar")]
    Heuristic,
}

impl SearchMode {
    #[inline(always)]
    pub fn priority(self, g: f64, h: f64) -> f64 {
        match self {
            SearchMode::UniformCost => g,
            SearchMode::Heuristic => g + h,
        }
    }

    pub fn uses_heuristic(self) -> bool {
        matches!(self, SearchMode::Heuristic)
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::UniformCost => write!(f, "uniform-cost"),
            SearchMode::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform-cost" | "uniform_cost" | "dijkstra" => Ok(SearchMode::UniformCost),
            "heuristic" | "astar" | "a*" => Ok(SearchMode::Heuristic),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

/// Configuration handed to [`SearchState::solve`](crate::engine::SearchState::solve).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub mode: SearchMode,
    /// Upper bound on popped nodes before giving up.
    pub max_expansions: u64,
    /// Wall-clock bound; 0 disables it.
    pub timeout_ms: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SearchOptions {
    pub fn uniform_cost() -> Self {
        Self { mode: SearchMode::UniformCost, ..Self::default() }
    }

    pub fn heuristic() -> Self {
        Self { mode: SearchMode::Heuristic, ..Self::default() }
    }

    /// Overlay environment variables on top of `self`. Missing or unparsable values are ignored.
    ///
    /// Variables:
    /// - PATHSEARCH_MODE: "uniform-cost" / "dijkstra" / "heuristic" / "astar"
    /// - PATHSEARCH_MAX_EXPANSIONS: integer
    /// - PATHSEARCH_TIMEOUT_MS: integer milliseconds; 0 disables
    pub fn with_env(mut self) -> Self {
        if let Some(mode) = env::var("PATHSEARCH_MODE").ok().and_then(|s| s.parse::<SearchMode>().ok()) {
            self.mode = mode;
        }
        if let Some(n) = env::var("PATHSEARCH_MAX_EXPANSIONS").ok().and_then(|s| s.parse::<u64>().ok()) {
            self.max_expansions = n;
        }
        if let Some(n) = env::var("PATHSEARCH_TIMEOUT_MS").ok().and_then(|s| s.parse::<u64>().ok()) {
            self.timeout_ms = n;
        }
        self
    }

    pub fn from_env() -> Self {
        Self::default().with_env()
    }
}
