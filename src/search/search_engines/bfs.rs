//! Breadth-first search: FIFO expansion, a closed set of state hashes, first
//! plan found. Optimal under the unit-cost model every operator uses.

use super::SearchResult;
use crate::search::search_space::{extract_plan, SearchNode};
use crate::task::Task;
use std::collections::{HashSet, VecDeque};

pub fn bfs(task: &Task) -> SearchResult {
    let root = SearchNode::root(task.initial_state().clone());
    let mut closed = HashSet::new();
    closed.insert(root.hash_value());

    let mut nodes = vec![root];
    let mut queue = VecDeque::new();
    queue.push_back(0usize);

    while let Some(node_idx) = queue.pop_front() {
        if task.goal_reached(nodes[node_idx].state()) {
            return SearchResult::Success(extract_plan(&nodes, node_idx));
        }

        let g = nodes[node_idx].g();
        let state = nodes[node_idx].state().clone();
        for (name, successor) in task.get_successor_states(&state) {
            if !closed.insert(successor.hash()) {
                continue;
            }
            nodes.push(SearchNode::child(node_idx, g, name.to_string(), successor));
            queue.push_back(nodes.len() - 1);
        }
    }

    SearchResult::NoSolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::{Fact, Operator};
    use crate::parsed_types::Name;
    use std::collections::HashSet as Set;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    #[test]
    fn root_already_satisfying_goal_needs_no_expansion() {
        let universe = Set::from([fact("a")]);
        let task = Task::encode(
            Name::new("t"),
            universe.clone(),
            universe.clone(),
            universe,
            Vec::<Operator>::new(),
        );
        assert_eq!(bfs(&task), SearchResult::Success(Vec::new()));
    }

    #[test]
    fn finds_shortest_plan_over_a_longer_alternative() {
        // a -> b -> goal (2 steps), and a -> goal directly is not available,
        // so BFS must explore the shorter of two discovered routes.
        let universe = Set::from([fact("a"), fact("b"), fact("goal")]);
        let init = Set::from([fact("a")]);
        let goal = Set::from([fact("goal")]);
        let step1 = Operator::new(
            "(a-to-b)".to_string(),
            Set::from([fact("a")]),
            Set::from([fact("b")]),
            Set::new(),
        );
        let step2 = Operator::new(
            "(b-to-goal)".to_string(),
            Set::from([fact("b")]),
            Set::from([fact("goal")]),
            Set::new(),
        );
        let task = Task::encode(Name::new("t"), universe, init, goal, vec![step1, step2]);

        match bfs(&task) {
            SearchResult::Success(plan) => {
                assert_eq!(plan, vec!["(a-to-b)".to_string(), "(b-to-goal)".to_string()])
            }
            SearchResult::NoSolution => panic!("expected a plan"),
        }
    }

    #[test]
    fn unsolvable_task_returns_no_solution() {
        let universe = Set::from([fact("a"), fact("unreachable")]);
        let init = Set::from([fact("a")]);
        let goal = Set::from([fact("unreachable")]);
        let task = Task::encode(Name::new("t"), universe, init, goal, Vec::<Operator>::new());
        assert_eq!(bfs(&task), SearchResult::NoSolution);
    }
}
