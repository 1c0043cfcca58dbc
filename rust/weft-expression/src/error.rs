//! Error type for malformed operator calls.

use thiserror::Error;

/// Hard failures surfaced to the caller.
///
/// These are programming-contract violations in the expression tree,
/// not data problems: a bound value of an unexpected shape is absorbed
/// by coercion and never reaches here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// A fixed-arity operator was invoked with the wrong number of
    /// arguments.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    Arity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Dispatch was attempted through a name the registry does not
    /// know.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
}
