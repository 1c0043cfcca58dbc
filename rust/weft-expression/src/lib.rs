//! Weft Expression
//!
//! The operator library behind Weft data-binding expressions: a sealed
//! set of named functions over dynamic values, the registry the
//! expression-tree evaluator dispatches through, and the uniform
//! evaluation contract each operator exposes.
//!
//! Operators are pure, stateless, and reentrant. Value-level
//! anomalies (null, NaN, type mismatches, cyclic lists) never fail a
//! render; they degrade to `NaN`, `false`, or coerced text. The only
//! hard error is a malformed call: wrong arity for a fixed-arity
//! operator, or dispatch through a name the registry does not know.
#![warn(clippy::all)]

pub mod error;
pub mod function;
pub mod functions;
pub mod registry;

pub use error::ExprError;
pub use function::Function;
pub use registry::{evaluate, lookup};

// Re-export the value model so callers need only one crate.
pub use weft_core::coerce;
pub use weft_core::{ListRef, ObjectRef, OpaqueObject, Value};
