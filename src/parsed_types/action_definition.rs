//! Contains action definitions via the [`ActionDefinition`] type.

use crate::parsed_types::TypedVariables;
use crate::parsed_types::{ActionName, Atom, PropEffect, Term};

/// An action definition.
///
/// Preconditions and effects arrive already normalised by the parser into a
/// conjunctive list of positive atoms and a positive add/delete effect list;
/// negation, disjunction and quantification have already been compiled away.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    name: ActionName,
    parameters: TypedVariables,
    preconditions: Vec<Atom<Term>>,
    effects: Vec<PropEffect>,
}

impl ActionDefinition {
    pub const fn new(
        name: ActionName,
        parameters: TypedVariables,
        preconditions: Vec<Atom<Term>>,
        effects: Vec<PropEffect>,
    ) -> Self {
        Self {
            name,
            parameters,
            preconditions,
            effects,
        }
    }

    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedVariables {
        &self.parameters
    }

    pub const fn preconditions(&self) -> &Vec<Atom<Term>> {
        &self.preconditions
    }

    pub const fn effects(&self) -> &Vec<PropEffect> {
        &self.effects
    }
}

impl AsRef<ActionName> for ActionDefinition {
    fn as_ref(&self) -> &ActionName {
        &self.name
    }
}
