//! A*: a priority queue ordered by `f = g + h`, tie-broken by larger `h`
//! (prefer deeper estimates) then by insertion order, with a g-cache used to
//! lazily discard stale duplicate queue entries rather than decrease-key
//! them in place.

use super::SearchResult;
use crate::search::heuristics::Heuristic;
use crate::search::search_space::{extract_plan, SearchNode};
use crate::task::Task;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// `(Reverse(f), h, Reverse(sequence))`, ordered so that the greatest
/// priority (what [`PriorityQueue::pop`] returns) is the smallest `f`,
/// ties broken by the largest `h`, then by the smallest (earliest)
/// insertion sequence.
type Priority = (Reverse<OrderedFloat<f64>>, OrderedFloat<f64>, Reverse<usize>);

fn priority(g: usize, h: f64, sequence: usize) -> Priority {
    let f = g as f64 + h;
    (Reverse(OrderedFloat(f)), OrderedFloat(h), Reverse(sequence))
}

pub fn astar(task: &Task, heuristic: &dyn Heuristic) -> SearchResult {
    let mut nodes = vec![SearchNode::root(task.initial_state().clone())];
    let h0 = heuristic.calculate_h(&mut nodes, 0, task);

    let mut state_cost: HashMap<u64, usize> = HashMap::new();
    state_cost.insert(nodes[0].hash_value(), 0);

    let mut sequence = 0usize;
    let mut queue = PriorityQueue::new();
    queue.push(0usize, priority(0, h0, sequence));
    sequence += 1;

    while let Some((node_idx, _)) = queue.pop() {
        // Stale check: this queue entry is an obsolete duplicate if a
        // cheaper path to the same state has since been found.
        if state_cost.get(&nodes[node_idx].hash_value()) != Some(&nodes[node_idx].g()) {
            continue;
        }

        if task.goal_reached(nodes[node_idx].state()) {
            return SearchResult::Success(extract_plan(&nodes, node_idx));
        }

        let g = nodes[node_idx].g();
        let state = nodes[node_idx].state().clone();
        for (name, successor) in task.get_successor_states(&state) {
            let succ_hash = successor.hash();
            nodes.push(SearchNode::child(node_idx, g, name.to_string(), successor));
            let child_idx = nodes.len() - 1;
            // Evaluated after the child is appended, so the heuristic can
            // read its parent's `unreached` set via `parent_id`.
            let h = heuristic.calculate_h(&mut nodes, child_idx, task);
            let child_g = nodes[child_idx].g();

            let is_improvement = match state_cost.get(&succ_hash) {
                None => true,
                Some(&best) => child_g < best,
            };
            if is_improvement {
                state_cost.insert(succ_hash, child_g);
                queue.push(child_idx, priority(child_g, h, sequence));
                sequence += 1;
            }
        }
    }

    SearchResult::NoSolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::{Fact, Operator};
    use crate::parsed_types::Name;
    use crate::search::heuristics::{BlindHeuristic, LandmarkHeuristic};
    use std::collections::HashSet as Set;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    fn chain_task() -> Task {
        let universe = Set::from([fact("a"), fact("b"), fact("c")]);
        let init = Set::from([fact("a")]);
        let goal = Set::from([fact("c")]);
        let step1 = Operator::new(
            "(a-to-b)".to_string(),
            Set::from([fact("a")]),
            Set::from([fact("b")]),
            Set::new(),
        );
        let step2 = Operator::new(
            "(b-to-c)".to_string(),
            Set::from([fact("b")]),
            Set::from([fact("c")]),
            Set::new(),
        );
        Task::encode(Name::new("chain"), universe, init, goal, vec![step1, step2])
    }

    #[test]
    fn blind_heuristic_behaves_like_bfs_on_unit_costs() {
        let task = chain_task();
        match astar(&task, &BlindHeuristic) {
            SearchResult::Success(plan) => {
                assert_eq!(plan, vec!["(a-to-b)".to_string(), "(b-to-c)".to_string()])
            }
            SearchResult::NoSolution => panic!("expected a plan"),
        }
    }

    #[test]
    fn landmark_heuristic_finds_same_length_plan_as_blind() {
        let task = chain_task();
        let landmark = LandmarkHeuristic::new(&task);
        match astar(&task, &landmark) {
            SearchResult::Success(plan) => assert_eq!(plan.len(), 2),
            SearchResult::NoSolution => panic!("expected a plan"),
        }
    }

    #[test]
    fn unsolvable_task_returns_no_solution() {
        let universe = Set::from([fact("a"), fact("unreachable")]);
        let init = Set::from([fact("a")]);
        let goal = Set::from([fact("unreachable")]);
        let task = Task::encode(Name::new("t"), universe, init, goal, Vec::<Operator>::new());
        assert_eq!(astar(&task, &BlindHeuristic), SearchResult::NoSolution);
    }
}
