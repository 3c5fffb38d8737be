//! Landmark discovery and the landmark-counting heuristic.
//!
//! A fact `f` is a *landmark* for a task if every plan that reaches the goal
//! must make `f` true at some point. Every goal fact is unconditionally a
//! landmark. For every other fact we approximate the (expensive, exact)
//! landmark test with the standard delete-relaxation test: `f` is a landmark
//! iff the goal is unreachable in the delete-relaxed task when every
//! operator that could add `f` is forbidden from doing so.
//!
//! Each landmark's cost is partitioned across the operators that can achieve
//! it (`cost(l) = min` over achievers `o` `of 1 / k_o`, where `k_o` is the
//! number of landmarks `o` achieves), and `h(node)` sums the costs of the
//! landmarks still unreached on the path to `node`. This is admissible: the
//! achiever of every still-unreached landmark must still appear somewhere in
//! the remaining plan, and no operator can be credited for more than its
//! `1 / k_o` share without double counting.

use super::Heuristic;
use crate::search::search_space::SearchNode;
use crate::task::Task;
use std::collections::{HashMap, HashSet};

/// Landmark-counting heuristic with cost partitioning.
#[derive(Debug)]
pub struct LandmarkHeuristic {
    /// All discovered landmark fact ids.
    landmarks: HashSet<usize>,
    /// Landmarks that are also goal facts; re-inserted into `unreached`
    /// whenever a node's state no longer satisfies them.
    goal_landmarks: HashSet<usize>,
    /// `cost[l]`: the cheapest per-operator share of landmark `l`.
    costs: HashMap<usize, f64>,
    /// `achieved_by[op_index]`: landmarks that operator `op_index` adds.
    achieved_by: Vec<Vec<usize>>,
    op_index_by_name: HashMap<String, usize>,
}

impl LandmarkHeuristic {
    /// Discovers landmarks for `task` via delete-relaxed reachability and
    /// computes their cost partitioning.
    pub fn new(task: &Task) -> Self {
        let init: HashSet<usize> = task.initial_state().fact_ids().collect();
        let goal: HashSet<usize> = task.goal_fact_ids().collect();

        // Seed L with the goal facts unconditionally, then test every
        // non-goal fact for landmark-hood via the forbidding reachability
        // check.
        let mut landmarks: HashSet<usize> = goal.clone();
        let non_goal_candidates: HashSet<usize> = (0..task.facts().len())
            .filter(|f| !goal.contains(f))
            .collect();
        landmarks.extend(
            non_goal_candidates
                .into_iter()
                .filter(|&f| !relaxed_reachable_without(task, &init, &goal, f)),
        );

        let goal_landmarks: HashSet<usize> = goal.clone();

        let mut costs: HashMap<usize, f64> = HashMap::new();
        let mut achieved_by: Vec<Vec<usize>> = Vec::with_capacity(task.operators().len());
        let mut op_index_by_name = HashMap::new();
        for (op_index, op) in task.operators().iter().enumerate() {
            op_index_by_name.insert(op.name().to_string(), op_index);
            let achieves: Vec<usize> = op.add().iter().copied().filter(|f| landmarks.contains(f)).collect();
            if !achieves.is_empty() {
                let share = 1.0 / achieves.len() as f64;
                for &l in &achieves {
                    let entry = costs.entry(l).or_insert(f64::INFINITY);
                    if share < *entry {
                        *entry = share;
                    }
                }
            }
            achieved_by.push(achieves);
        }

        Self {
            landmarks,
            goal_landmarks,
            costs,
            achieved_by,
            op_index_by_name,
        }
    }

    fn cost_of(&self, landmark: usize) -> f64 {
        self.costs.get(&landmark).copied().unwrap_or(0.0)
    }
}

/// True if the goal is reachable from `init` in the delete-relaxed task when
/// no operator that adds `forbidden` is allowed to fire. Runs a greedy
/// forward expansion: repeatedly apply every applicable, non-forbidden
/// operator's add effects (ignoring deletes) until the goal holds or the
/// reachable set stops growing.
fn relaxed_reachable_without(task: &Task, init: &HashSet<usize>, goal: &HashSet<usize>, forbidden: usize) -> bool {
    let mut reached: HashSet<usize> = init.clone();
    loop {
        if goal.iter().all(|g| reached.contains(g)) {
            return true;
        }
        let mut grew = false;
        for op in task.operators() {
            if op.add().contains(&forbidden) {
                continue;
            }
            if op.pre().iter().all(|p| reached.contains(p)) {
                for &a in op.add() {
                    if reached.insert(a) {
                        grew = true;
                    }
                }
            }
        }
        if !grew {
            return goal.iter().all(|g| reached.contains(g));
        }
    }
}

impl Heuristic for LandmarkHeuristic {
    fn calculate_h(&self, nodes: &mut [SearchNode], node_idx: usize, _task: &Task) -> f64 {
        let unreached: HashSet<usize> = if nodes[node_idx].is_root() {
            let state = nodes[node_idx].state();
            self.landmarks.iter().copied().filter(|&l| !state.contains(l)).collect()
        } else {
            let parent_id = nodes[node_idx].parent_id() as usize;
            let mut unreached: HashSet<usize> = nodes[parent_id].unreached.iter().copied().collect();

            // The corrected removal: subtract exactly the achieved landmarks
            // of the operator that produced this node, found by looking up
            // its add-list, rather than erasing by operator name.
            if let Some(&op_index) = self.op_index_by_name.get(nodes[node_idx].action()) {
                for &l in &self.achieved_by[op_index] {
                    unreached.remove(&l);
                }
            }

            let state = nodes[node_idx].state();
            for &l in &self.goal_landmarks {
                if !state.contains(l) {
                    unreached.insert(l);
                }
            }
            unreached.retain(|&l| !state.contains(l));
            unreached
        };

        let h = unreached.iter().map(|&l| self.cost_of(l)).sum();
        nodes[node_idx].unreached = unreached.into_iter().collect();
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::{Fact, Operator};
    use crate::parsed_types::Name;
    use std::collections::HashSet;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    /// A two-step chain `a -> b -> c` where `c` is the goal: both `a` being
    /// left behind and `b` being produced are landmarks, since no plan can
    /// reach `c` without first passing through `b`, and `b` requires `a`.
    fn chain_task() -> Task {
        let universe = HashSet::from([fact("a"), fact("b"), fact("c")]);
        let init = HashSet::from([fact("a")]);
        let goal = HashSet::from([fact("c")]);
        let step1 = Operator::new(
            "(a-to-b)".to_string(),
            HashSet::from([fact("a")]),
            HashSet::from([fact("b")]),
            HashSet::new(),
        );
        let step2 = Operator::new(
            "(b-to-c)".to_string(),
            HashSet::from([fact("b")]),
            HashSet::from([fact("c")]),
            HashSet::new(),
        );
        Task::encode(Name::new("chain"), universe, init, goal, vec![step1, step2])
    }

    #[test]
    fn discovers_intermediate_landmark() {
        let task = chain_task();
        let h = LandmarkHeuristic::new(&task);
        let b_id = task.facts().iter().position(|f| f == &fact("b")).unwrap();
        let c_id = task.facts().iter().position(|f| f == &fact("c")).unwrap();
        assert!(h.landmarks.contains(&b_id));
        assert!(h.landmarks.contains(&c_id));
    }

    #[test]
    fn heuristic_decreases_along_the_chain_and_reaches_zero_at_the_goal() {
        let task = chain_task();
        let h = LandmarkHeuristic::new(&task);

        let root = SearchNode::root(task.initial_state().clone());
        let mut nodes = vec![root];
        let h_root = h.calculate_h(&mut nodes, 0, &task);
        assert!(h_root > 0.0);

        let op1 = &task.operators()[0];
        let s1 = task.apply(op1, nodes[0].state());
        nodes.push(SearchNode::child(0, nodes[0].g(), op1.name().to_string(), s1));
        let h1 = h.calculate_h(&mut nodes, 1, &task);
        assert!(h1 < h_root);

        let op2 = &task.operators()[1];
        let s2 = task.apply(op2, nodes[1].state());
        nodes.push(SearchNode::child(1, nodes[1].g(), op2.name().to_string(), s2));
        let h2 = h.calculate_h(&mut nodes, 2, &task);
        assert_eq!(h2, 0.0);
        assert!(task.goal_reached(nodes[2].state()));
    }

    /// Regression test for the corrected removal semantics: the producing
    /// operator's achieved landmarks are removed from `unreached`, not every
    /// landmark sharing the operator's name. Two distinct operators that
    /// happen to achieve disjoint landmarks must not be confused with one
    /// another.
    #[test]
    fn removal_is_by_achieved_landmark_not_by_operator_name() {
        let universe = HashSet::from([fact("a"), fact("b"), fact("c"), fact("d")]);
        let init = HashSet::from([fact("a")]);
        let goal = HashSet::from([fact("c"), fact("d")]);
        let to_c = Operator::new(
            "(make-c)".to_string(),
            HashSet::from([fact("a")]),
            HashSet::from([fact("c")]),
            HashSet::new(),
        );
        let to_d = Operator::new(
            "(make-d)".to_string(),
            HashSet::from([fact("a")]),
            HashSet::from([fact("d")]),
            HashSet::new(),
        );
        let task = Task::encode(Name::new("t"), universe, init, goal, vec![to_c, to_d]);
        let h = LandmarkHeuristic::new(&task);

        let root = SearchNode::root(task.initial_state().clone());
        let mut nodes = vec![root];
        h.calculate_h(&mut nodes, 0, &task);
        let unreached_at_root: HashSet<usize> = nodes[0].unreached.iter().copied().collect();

        let op_c = &task.operators()[0];
        let s = task.apply(op_c, nodes[0].state());
        nodes.push(SearchNode::child(0, nodes[0].g(), op_c.name().to_string(), s));
        h.calculate_h(&mut nodes, 1, &task);

        let c_id = task.facts().iter().position(|f| f == &fact("c")).unwrap();
        let d_id = task.facts().iter().position(|f| f == &fact("d")).unwrap();
        assert!(unreached_at_root.contains(&c_id));
        assert!(unreached_at_root.contains(&d_id));
        // only c's landmark was removed by applying (make-c); d must remain.
        assert!(!nodes[1].unreached.contains(&c_id));
        assert!(nodes[1].unreached.contains(&d_id));
    }
}
