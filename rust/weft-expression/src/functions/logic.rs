//! Logical operators with browser-runtime value semantics.
//!
//! AND, OR, and TERNARY return an operand unchanged rather than a
//! boolean, so a binding like `{!v.items || v.fallback}` yields the
//! value itself. Only NOT produces a boolean.

use weft_core::coerce::to_boolean;
use weft_core::Value;

use crate::error::ExprError;
use crate::function::{binary_args, ternary_args, unary_arg, Function};

pub struct And;

pub static AND: And = And;

impl Function for And {
    fn keys(&self) -> &'static [&'static str] {
        &["and"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("and", args)?;
        Ok(if to_boolean(left) {
            right.clone()
        } else {
            left.clone()
        })
    }
}

pub struct Or;

pub static OR: Or = Or;

impl Function for Or {
    fn keys(&self) -> &'static [&'static str] {
        &["or"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("or", args)?;
        Ok(if to_boolean(left) {
            left.clone()
        } else {
            right.clone()
        })
    }
}

pub struct Not;

pub static NOT: Not = Not;

impl Function for Not {
    fn keys(&self) -> &'static [&'static str] {
        &["not"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let value = unary_arg("not", args)?;
        Ok(Value::Boolean(!to_boolean(value)))
    }
}

/// Conditional selection: the branch values pass through unchanged.
pub struct Ternary;

pub static TERNARY: Ternary = Ternary;

impl Function for Ternary {
    fn keys(&self) -> &'static [&'static str] {
        &["if"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (condition, then_branch, else_branch) = ternary_args("if", args)?;
        Ok(if to_boolean(condition) {
            then_branch.clone()
        } else {
            else_branch.clone()
        })
    }
}
