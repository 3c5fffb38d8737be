use super::Heuristic;
use crate::search::search_space::SearchNode;
use crate::task::Task;

/// `h(node) = 0` for every node. Admissible and consistent by construction;
/// turns A* into uniform-cost (here, since every operator costs 1, breadth
/// first) search.
#[derive(Debug, Default)]
pub struct BlindHeuristic;

impl Heuristic for BlindHeuristic {
    fn calculate_h(&self, _nodes: &mut [SearchNode], _node_idx: usize, _task: &Task) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::{Fact, Operator};
    use crate::parsed_types::Name;
    use std::collections::HashSet;

    #[test]
    fn always_zero() {
        let fact = Fact::new("a", std::iter::empty());
        let universe = HashSet::from([fact.clone()]);
        let init = HashSet::from([fact.clone()]);
        let goal = HashSet::from([fact]);
        let task = Task::encode(Name::new("t"), universe, init, goal, Vec::<Operator>::new());
        let mut nodes = vec![SearchNode::root(task.initial_state().clone())];
        assert_eq!(BlindHeuristic.calculate_h(&mut nodes, 0, &task), 0.0);
    }
}
