#![warn(missing_debug_implementations)]
#![deny(dead_code)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Used by the `plan` binary only. Unfortunately cargo does not yet allow
// specifying dependencies for binaries only.
use tracing_subscriber as _;

pub mod grounding;
pub mod parsed_types;
pub mod parsers;
pub mod search;
pub mod task;

pub use grounding::ground;
pub use parsed_types::*;
pub use parsers::Parser;
pub use task::Task;
