//! Contains PDDL requirement keys via the [`Requirement`] type, and the
//! [`Requirements`] collection.

use std::ops::Deref;

/// A single `:require-key`, e.g. `:typing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Strips,
    Typing,
    NegativePreconditions,
    DisjunctivePreconditions,
    Equality,
    ExistentialPreconditions,
    UniversalPreconditions,
    QuantifiedPreconditions,
    ConditionalEffects,
    Fluents,
    NumericFluents,
    ObjectFluents,
    Adl,
    DurativeActions,
    DurationInequalities,
    ContinuousEffects,
    DerivedPredicates,
    TimedInitialLiterals,
    Preferences,
    Constraints,
    ActionCosts,
}

/// String forms of each [`Requirement`], as they appear in PDDL source.
pub mod names {
    pub const STRIPS: &str = ":strips";
    pub const TYPING: &str = ":typing";
    pub const NEGATIVE_PRECONDITIONS: &str = ":negative-preconditions";
    pub const DISJUNCTIVE_PRECONDITIONS: &str = ":disjunctive-preconditions";
    pub const EQUALITY: &str = ":equality";
    pub const EXISTENTIAL_PRECONDITIONS: &str = ":existential-preconditions";
    pub const UNIVERSAL_PRECONDITIONS: &str = ":universal-preconditions";
    pub const QUANTIFIED_PRECONDITIONS: &str = ":quantified-preconditions";
    pub const CONDITIONAL_EFFECTS: &str = ":conditional-effects";
    pub const FLUENTS: &str = ":fluents";
    pub const NUMERIC_FLUENTS: &str = ":numeric-fluents";
    pub const OBJECT_FLUENTS: &str = ":object-fluents";
    pub const ADL: &str = ":adl";
    pub const DURATIVE_ACTIONS: &str = ":durative-actions";
    pub const DURATION_INEQUALITIES: &str = ":duration-inequalities";
    pub const CONTINUOUS_EFFECTS: &str = ":continuous-effects";
    pub const DERIVED_PREDICATES: &str = ":derived-predicates";
    pub const TIMED_INITIAL_LITERALS: &str = ":timed-initial-literals";
    pub const PREFERENCES: &str = ":preferences";
    pub const CONSTRAINTS: &str = ":constraints";
    pub const ACTION_COSTS: &str = ":action-costs";
}

impl TryFrom<&str> for Requirement {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(match value {
            names::STRIPS => Self::Strips,
            names::TYPING => Self::Typing,
            names::NEGATIVE_PRECONDITIONS => Self::NegativePreconditions,
            names::DISJUNCTIVE_PRECONDITIONS => Self::DisjunctivePreconditions,
            names::EQUALITY => Self::Equality,
            names::EXISTENTIAL_PRECONDITIONS => Self::ExistentialPreconditions,
            names::UNIVERSAL_PRECONDITIONS => Self::UniversalPreconditions,
            names::QUANTIFIED_PRECONDITIONS => Self::QuantifiedPreconditions,
            names::CONDITIONAL_EFFECTS => Self::ConditionalEffects,
            names::FLUENTS => Self::Fluents,
            names::NUMERIC_FLUENTS => Self::NumericFluents,
            names::OBJECT_FLUENTS => Self::ObjectFluents,
            names::ADL => Self::Adl,
            names::DURATIVE_ACTIONS => Self::DurativeActions,
            names::DURATION_INEQUALITIES => Self::DurationInequalities,
            names::CONTINUOUS_EFFECTS => Self::ContinuousEffects,
            names::DERIVED_PREDICATES => Self::DerivedPredicates,
            names::TIMED_INITIAL_LITERALS => Self::TimedInitialLiterals,
            names::PREFERENCES => Self::Preferences,
            names::CONSTRAINTS => Self::Constraints,
            names::ACTION_COSTS => Self::ActionCosts,
            _ => return Err(()),
        })
    }
}

/// The set of requirements declared by a `(:requirements ...)` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements(Vec<Requirement>);

impl Requirements {
    pub fn new<T: Into<Vec<Requirement>>>(requirements: T) -> Self {
        Self(requirements.into())
    }
}

impl Deref for Requirements {
    type Target = [Requirement];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl FromIterator<Requirement> for Requirements {
    fn from_iter<T: IntoIterator<Item = Requirement>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
