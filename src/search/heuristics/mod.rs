//! Heuristic functions guiding A*: an estimate of the cost remaining from a
//! node to the goal.

mod blind;
mod landmark;

pub use blind::BlindHeuristic;
pub use landmark::LandmarkHeuristic;

use crate::search::search_space::SearchNode;
use crate::task::Task;

/// A heuristic estimates `h(node)`, the cost remaining to the goal.
///
/// Implementations may use `nodes[node_idx].unreached` as working storage to
/// carry information down from parent to child (the landmark heuristic uses
/// this to avoid recomputing from scratch at every node); a heuristic that
/// has no such state, like [`BlindHeuristic`], simply ignores it.
pub trait Heuristic {
    fn calculate_h(&self, nodes: &mut [SearchNode], node_idx: usize, task: &Task) -> f64;
}

/// Selects which heuristic the CLI constructs for A*.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    /// `h = 0` everywhere; turns A* into breadth-first search.
    Blind,
    /// Landmark-counting with cost partitioning.
    Landmark,
}

impl HeuristicName {
    pub fn create(&self, task: &Task) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Blind => Box::new(BlindHeuristic),
            HeuristicName::Landmark => Box::new(LandmarkHeuristic::new(task)),
        }
    }
}
