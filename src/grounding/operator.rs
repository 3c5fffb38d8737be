//! The ground, lifted-form operator produced directly by grounding, before
//! integer-encoding.

use crate::grounding::Fact;
use std::collections::HashSet;

/// A fully ground operator: a name and three fact sets.
///
/// Constructing an [`Operator`] enforces the STRIPS delete-then-add
/// convention and drops no-op preconditions from the add list, per the
/// invariants every grounder-produced operator must satisfy:
/// `pre ∩ add = ∅` and `add ∩ del = ∅`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Operator {
    name: String,
    pre: HashSet<Fact>,
    add: HashSet<Fact>,
    del: HashSet<Fact>,
}

impl Operator {
    /// Builds an operator from raw grounded fact sets, applying the
    /// precondition/add/delete normalisation invariants.
    pub fn new(
        name: String,
        pre: HashSet<Fact>,
        mut add: HashSet<Fact>,
        mut del: HashSet<Fact>,
    ) -> Self {
        // A fact in both add and delete is add-only.
        del.retain(|f| !add.contains(f));
        // A fact already true by precondition is a no-op add.
        add.retain(|f| !pre.contains(f));

        Self {
            name,
            pre,
            add,
            del,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pre(&self) -> &HashSet<Fact> {
        &self.pre
    }

    pub fn add(&self) -> &HashSet<Fact> {
        &self.add
    }

    pub fn del(&self) -> &HashSet<Fact> {
        &self.del
    }

    /// True once relevance analysis has stripped both effect sets to empty:
    /// the operator can no longer change anything relevant and is dead.
    pub fn is_dead(&self) -> bool {
        self.add.is_empty() && self.del.is_empty()
    }

    pub(crate) fn retain_add_del(&mut self, relevant: &HashSet<Fact>) {
        self.add.retain(|f| relevant.contains(f));
        self.del.retain(|f| relevant.contains(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(s: &str) -> Fact {
        Fact::new(s, std::iter::empty())
    }

    #[test]
    fn delete_then_add_favours_add() {
        let pre = HashSet::new();
        let add = HashSet::from([fact("clear")]);
        let del = HashSet::from([fact("clear")]);
        let op = Operator::new("(noop)".to_string(), pre, add, del);
        assert!(op.add().contains(&fact("clear")));
        assert!(!op.del().contains(&fact("clear")));
    }

    #[test]
    fn precondition_already_true_is_not_readded() {
        let pre = HashSet::from([fact("clear")]);
        let add = HashSet::from([fact("clear")]);
        let del = HashSet::new();
        let op = Operator::new("(noop)".to_string(), pre, add, del);
        assert!(!op.add().contains(&fact("clear")));
    }
}
