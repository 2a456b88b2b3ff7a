pub mod frontier;
pub mod path;
pub mod search;

pub use frontier::{Entry, Frontier, Offer, Verdict};
pub use path::{format_path, path_cost};
pub use search::{Expansion, RecordId, SearchRecord, SearchState, Step};
