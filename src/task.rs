//! The runnable artefact produced by [`crate::grounding::ground`]: operators
//! and facts after integer-encoding, plus the initial state and goal.
//!
//! Every fact is assigned a dense id in `[0, |facts|)`, in the order it first
//! appears in the *sorted* fact universe, so that two grounding runs on
//! identical input produce identical fact-id assignments. Each operator's
//! fact sets become sorted integer arrays and a [`bit_set::BitSet`]
//! precondition mask. States carry both the bitset and a commutative,
//! order-independent XOR rolling hash over per-fact random 64-bit tags, so
//! that applying an operator updates the hash by XORing only the tags of
//! facts that actually flip rather than recomputing it from scratch.

use crate::grounding::{Fact, Operator};
use crate::parsed_types::Name;
use bit_set::BitSet;
use rand::Rng;
use std::collections::HashSet;

/// One ground operator after integer-encoding.
#[derive(Debug, Clone)]
pub struct EncodedOperator {
    name: String,
    pre: Vec<usize>,
    add: Vec<usize>,
    del: Vec<usize>,
    pre_mask: BitSet,
}

impl EncodedOperator {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    pub fn add(&self) -> &[usize] {
        &self.add
    }

    pub fn del(&self) -> &[usize] {
        &self.del
    }
}

/// A search state: the set of true fact ids plus its rolling content hash.
#[derive(Debug, Clone)]
pub struct State {
    bits: BitSet,
    hash: u64,
}

impl State {
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn contains(&self, fact_id: usize) -> bool {
        self.bits.contains(fact_id)
    }

    pub fn fact_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}
impl Eq for State {}

/// The fully encoded, immutable planning task: operators, the fact universe
/// (kept for naming/debug), the initial state, and the goal.
#[derive(Debug)]
pub struct Task {
    name: Name,
    facts: Vec<Fact>,
    operators: Vec<EncodedOperator>,
    initial_state: State,
    goal_mask: BitSet,
    fact_tags: Vec<u64>,
}

impl Task {
    /// Integer-encodes a grounded problem: dense fact ids in sorted order,
    /// operators rewritten as sorted integer arrays + bitset masks, and the
    /// initial state/goal as bitsets with freshly tagged rolling hashes.
    pub fn encode(
        name: Name,
        fact_universe: HashSet<Fact>,
        init: HashSet<Fact>,
        goal: HashSet<Fact>,
        operators: Vec<Operator>,
    ) -> Self {
        let mut facts: Vec<Fact> = fact_universe.into_iter().collect();
        facts.sort();

        let fact_id: std::collections::HashMap<&Fact, usize> =
            facts.iter().enumerate().map(|(id, f)| (f, id)).collect();

        let mut rng = rand::thread_rng();
        let fact_tags: Vec<u64> = (0..facts.len()).map(|_| rng.gen()).collect();

        let encode_set = |set: &HashSet<Fact>| -> Vec<usize> {
            let mut ids: Vec<usize> = set.iter().filter_map(|f| fact_id.get(f).copied()).collect();
            ids.sort_unstable();
            ids
        };

        let encoded_operators = operators
            .into_iter()
            .map(|op| {
                let pre = encode_set(op.pre());
                let add = encode_set(op.add());
                let del = encode_set(op.del());
                let mut pre_mask = BitSet::new();
                for &id in &pre {
                    pre_mask.insert(id);
                }
                EncodedOperator {
                    name: op.name().to_string(),
                    pre,
                    add,
                    del,
                    pre_mask,
                }
            })
            .collect();

        let to_state = |set: &HashSet<Fact>| -> State {
            let mut bits = BitSet::new();
            let mut hash = 0u64;
            for id in encode_set(set) {
                bits.insert(id);
                hash ^= fact_tags[id];
            }
            State { bits, hash }
        };

        let initial_state = to_state(&init);
        let goal_mask = {
            let mut mask = BitSet::new();
            for id in encode_set(&goal) {
                mask.insert(id);
            }
            mask
        };

        Self {
            name,
            facts,
            operators: encoded_operators,
            initial_state,
            goal_mask,
            fact_tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn fact(&self, id: usize) -> &Fact {
        &self.facts[id]
    }

    pub fn operators(&self) -> &[EncodedOperator] {
        &self.operators
    }

    pub fn operator_names(&self) -> Vec<String> {
        self.operators.iter().map(|op| op.name().to_string()).collect()
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goal_fact_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.goal_mask.iter()
    }

    /// `applicable(op, state)`: `(state & op.pre_mask) == op.pre_mask`.
    pub fn applicable(&self, op: &EncodedOperator, state: &State) -> bool {
        op.pre_mask.is_subset(&state.bits)
    }

    /// `apply(op, state)`: `(state ∪ add(op)) \ del(op)`, with the hash
    /// updated by XORing only the tags of facts whose membership actually
    /// flips.
    pub fn apply(&self, op: &EncodedOperator, state: &State) -> State {
        let mut bits = state.bits.clone();
        let mut hash = state.hash;
        for &f in &op.add {
            if bits.insert(f) {
                hash ^= self.fact_tags[f];
            }
        }
        for &f in &op.del {
            if bits.remove(f) {
                hash ^= self.fact_tags[f];
            }
        }
        State { bits, hash }
    }

    /// For every applicable operator, returns `(operator_name, successor)`.
    pub fn get_successor_states(&self, state: &State) -> Vec<(&str, State)> {
        self.operators
            .iter()
            .filter(|op| self.applicable(op, state))
            .map(|op| (op.name(), self.apply(op, state)))
            .collect()
    }

    /// `goal_reached(state)`: `(state & goal_mask) == goal_mask`.
    pub fn goal_reached(&self, state: &State) -> bool {
        self.goal_mask.is_subset(&state.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    fn one_op_task() -> Task {
        let universe = HashSet::from([fact("a"), fact("b")]);
        let init = HashSet::from([fact("a")]);
        let goal = HashSet::from([fact("b")]);
        let op = Operator::new(
            "(flip)".to_string(),
            HashSet::from([fact("a")]),
            HashSet::from([fact("b")]),
            HashSet::from([fact("a")]),
        );
        Task::encode(Name::new("test"), universe, init, goal, vec![op])
    }

    #[test]
    fn applicable_and_apply_reach_goal() {
        let task = one_op_task();
        let op = &task.operators()[0];
        assert!(task.applicable(op, task.initial_state()));
        let next = task.apply(op, task.initial_state());
        assert!(task.goal_reached(&next));
    }

    #[test]
    fn equal_states_hash_equal() {
        let task = one_op_task();
        let op = &task.operators()[0];
        let a = task.apply(op, task.initial_state());
        let b = task.apply(op, task.initial_state());
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a, b);
    }
}
