//! The canonical ground-atom representation shared by every subsystem
//! downstream of grounding.

use crate::parsed_types::{Atom, Name};
use std::fmt;

/// A canonical ground atom, formatted once and reused as the hash/equality
/// key for every set, map and relevance computation in the grounder.
///
/// Canonical form: `(predicate-name arg1 arg2 ...)`, lower-case, arguments
/// separated by a single ASCII space, no trailing space for a nullary
/// predicate.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Fact(String);

impl Fact {
    /// Builds the canonical fact string for a predicate applied to the given
    /// argument names.
    pub fn new<'a>(predicate_name: &str, args: impl IntoIterator<Item = &'a Name>) -> Self {
        let mut s = String::from("(");
        s.push_str(&predicate_name.to_ascii_lowercase());
        for arg in args {
            s.push(' ');
            s.push_str(&arg.to_ascii_lowercase());
        }
        s.push(')');
        Self(s)
    }

    /// Grounds an [`Atom`] of object [`Name`]s into a [`Fact`].
    pub fn from_atom(atom: &Atom<Name>) -> Self {
        Self::new(atom.predicate_name(), atom.values())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullary_predicate_has_no_trailing_space() {
        let fact = Fact::new("HANDEMPTY", std::iter::empty::<&Name>());
        assert_eq!(fact.as_str(), "(handempty)");
    }

    #[test]
    fn arguments_are_lower_cased_and_space_separated() {
        let a = Name::new("A");
        let b = Name::new("B");
        let fact = Fact::new("On", [&a, &b]);
        assert_eq!(fact.as_str(), "(on a b)");
    }
}
