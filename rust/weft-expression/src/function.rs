//! The uniform evaluation contract operators expose.

use weft_core::Value;

use crate::error::ExprError;

/// A named expression function.
///
/// The expression compiler resolves each operator node in a binding to
/// one of these; at render time the node's already-evaluated children
/// arrive as `args`. Implementations never query external state and
/// never retain the borrowed values past the call.
pub trait Function: Send + Sync {
    /// Registry identifiers this function answers to.
    fn keys(&self) -> &'static [&'static str];

    /// Apply the operator to already-resolved operand values.
    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError>;
}

/// Extract the single operand of a unary operator.
pub(crate) fn unary_arg<'a>(
    function: &'static str,
    args: &'a [Value],
) -> Result<&'a Value, ExprError> {
    match args {
        [value] => Ok(value),
        _ => Err(arity(function, 1, args.len())),
    }
}

/// Extract both operands of a binary operator.
pub(crate) fn binary_args<'a>(
    function: &'static str,
    args: &'a [Value],
) -> Result<(&'a Value, &'a Value), ExprError> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(arity(function, 2, args.len())),
    }
}

/// Extract the three operands of a ternary operator.
pub(crate) fn ternary_args<'a>(
    function: &'static str,
    args: &'a [Value],
) -> Result<(&'a Value, &'a Value, &'a Value), ExprError> {
    match args {
        [first, second, third] => Ok((first, second, third)),
        _ => Err(arity(function, 3, args.len())),
    }
}

fn arity(function: &'static str, expected: usize, actual: usize) -> ExprError {
    ExprError::Arity {
        function,
        expected,
        actual,
    }
}
