//! The AST types returned by the [`crate::parsers`] module: plain data
//! describing a domain and a problem instance, with no dependency on the
//! parser or the search engine.

mod action_definition;
mod action_name;
mod atom;
mod constants;
mod domain;
mod iterators;
mod name;
mod objects;
mod predicate_definition;
mod predicate_name;
mod problem;
mod prop_effect;
mod requirement;
mod term;
mod r#type;
mod typed;
mod typed_list;
mod types;
mod variable;

pub use action_definition::ActionDefinition;
pub use action_name::ActionName;
pub use atom::Atom;
pub use constants::Constants;
pub use domain::Domain;
pub use name::Name;
pub use objects::Objects;
pub use predicate_definition::PredicateDefinition;
pub use predicate_name::PredicateName;
pub use problem::Problem;
pub use prop_effect::PropEffect;
pub use r#type::{PrimitiveType, Type, TYPE_OBJECT};
pub use requirement::{Requirement, Requirements};
pub use term::Term;
pub use typed::{ToTyped, Typed};
pub use typed_list::{TypedList, TypedNames, TypedVariables};
pub use types::Types;
pub use variable::Variable;
