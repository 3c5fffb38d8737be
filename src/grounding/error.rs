//! Errors raised while grounding a [`Problem`](crate::Problem).

use crate::parsed_types::Name;
use thiserror::Error;

/// Malformed-input errors detected while grounding. These are fatal: the
/// grounder has no recovery path and the caller should abort the plan call.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GroundingError {
    #[error("object `{0}` is declared as both a domain constant and a problem object")]
    DuplicateObject(Name),

    #[error("atom references undeclared predicate `{0}`")]
    UndeclaredPredicate(Name),

    #[error("atom references undeclared object `{0}`")]
    UndeclaredObject(Name),

    #[error("atom `{predicate}` expects {expected} argument(s) but got {actual}")]
    ArityMismatch {
        predicate: Name,
        expected: usize,
        actual: usize,
    },
}
