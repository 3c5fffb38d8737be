//! The generic forward-search driver: search nodes, BFS and A* drivers, and
//! the heuristics that guide them.

pub mod heuristics;
pub mod search_engines;
mod search_space;
mod verbosity;

pub use search_space::{extract_plan, SearchNode};
pub use verbosity::Verbosity;
