//! Search nodes and the node vector search algorithms expand into.

use crate::task::State;

/// A parent index marking a node as the search root.
pub const ROOT_PARENT: isize = -1;

/// One node in the search space.
///
/// Nodes are appended to a [`Vec<SearchNode>`] for the life of one search;
/// `parent_id` is an index into that same vector, so the vector must never
/// reorder or drop entries mid-search.
#[derive(Debug, Clone)]
pub struct SearchNode {
    state: State,
    parent_id: isize,
    action: String,
    g: usize,
    hash_value: u64,
    /// Landmark fact ids still to be reached on this branch. Populated by
    /// the landmark heuristic; left empty under the blind heuristic.
    pub unreached: Vec<usize>,
}

impl SearchNode {
    /// Builds the root node: no parent, no action, zero cost.
    pub fn root(state: State) -> Self {
        let hash_value = state.hash();
        Self {
            state,
            parent_id: ROOT_PARENT,
            action: String::new(),
            g: 0,
            hash_value,
            unreached: Vec::new(),
        }
    }

    /// Builds a child node reached from `parent_id` via operator `action`.
    pub fn child(parent_id: usize, parent_g: usize, action: String, state: State) -> Self {
        let hash_value = state.hash();
        Self {
            state,
            parent_id: parent_id as isize,
            action,
            g: parent_g + 1,
            hash_value,
            unreached: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent_id(&self) -> isize {
        self.parent_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn g(&self) -> usize {
        self.g
    }

    pub fn hash_value(&self) -> u64 {
        self.hash_value
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT
    }
}

/// Walks parent pointers from `terminal` back to the root, collecting
/// `action`s in execution order. The root's empty action is omitted.
pub fn extract_plan(nodes: &[SearchNode], terminal: usize) -> Vec<String> {
    let mut plan = Vec::new();
    let mut current = terminal;
    loop {
        let node = &nodes[current];
        if node.is_root() {
            break;
        }
        plan.push(node.action().to_string());
        current = node.parent_id() as usize;
    }
    plan.reverse();
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::{Fact, Operator};
    use crate::parsed_types::Name;
    use crate::task::Task;
    use std::collections::HashSet;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    #[test]
    fn extract_plan_omits_root_action() {
        let universe = HashSet::from([fact("a"), fact("b")]);
        let init = HashSet::from([fact("a")]);
        let goal = HashSet::from([fact("b")]);
        let op = Operator::new(
            "(flip)".to_string(),
            HashSet::from([fact("a")]),
            HashSet::from([fact("b")]),
            HashSet::from([fact("a")]),
        );
        let task = Task::encode(Name::new("t"), universe, init, goal, vec![op]);

        let root = SearchNode::root(task.initial_state().clone());
        let encoded_op = &task.operators()[0];
        let successor = task.apply(encoded_op, root.state());
        let child = SearchNode::child(0, root.g(), encoded_op.name().to_string(), successor);

        let nodes = vec![root, child];
        let plan = extract_plan(&nodes, 1);
        assert_eq!(plan, vec!["(flip)".to_string()]);
    }
}
