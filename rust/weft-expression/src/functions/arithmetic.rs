//! Arithmetic operators: the polymorphic ADD plus the purely numeric
//! set.
//!
//! Everything but ADD coerces both operands to numbers and applies
//! IEEE-754 semantics: division by zero yields signed infinity or NaN,
//! modulus by zero yields NaN, and NaN propagates.

use weft_core::coerce::{concat_string, to_number};
use weft_core::Value;

use crate::error::ExprError;
use crate::function::{binary_args, unary_arg, Function};

fn numeric_binary(
    function: &'static str,
    args: &[Value],
    op: fn(f64, f64) -> f64,
) -> Result<Value, ExprError> {
    let (left, right) = binary_args(function, args)?;
    Ok(Value::Number(op(to_number(left), to_number(right))))
}

fn numeric_unary(
    function: &'static str,
    args: &[Value],
    op: fn(f64) -> f64,
) -> Result<Value, ExprError> {
    let value = unary_arg(function, args)?;
    Ok(Value::Number(op(to_number(value))))
}

/// Addition / concatenation.
///
/// The string branch wins whenever either operand naturally prefers a
/// string reading (strings, lists, maps, objects). Null contributes
/// the text `"null"` on that branch but the numeric identity 0 on the
/// numeric branch.
pub struct Add;

pub static ADD: Add = Add;

impl Function for Add {
    fn keys(&self) -> &'static [&'static str] {
        &["add", "concat"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("add", args)?;
        if left.prefers_string() || right.prefers_string() {
            let mut text = concat_string(left);
            text.push_str(&concat_string(right));
            Ok(Value::String(text))
        } else {
            Ok(Value::Number(to_number(left) + to_number(right)))
        }
    }
}

pub struct Subtract;

pub static SUBTRACT: Subtract = Subtract;

impl Function for Subtract {
    fn keys(&self) -> &'static [&'static str] {
        &["sub", "subtract"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_binary("sub", args, |a, b| a - b)
    }
}

pub struct Multiply;

pub static MULTIPLY: Multiply = Multiply;

impl Function for Multiply {
    fn keys(&self) -> &'static [&'static str] {
        &["mult", "multiply"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_binary("mult", args, |a, b| a * b)
    }
}

pub struct Divide;

pub static DIVIDE: Divide = Divide;

impl Function for Divide {
    fn keys(&self) -> &'static [&'static str] {
        &["div", "divide"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_binary("div", args, |a, b| a / b)
    }
}

pub struct Modulus;

pub static MODULUS: Modulus = Modulus;

impl Function for Modulus {
    fn keys(&self) -> &'static [&'static str] {
        &["mod", "modulus"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_binary("mod", args, |a, b| a % b)
    }
}

pub struct Negate;

pub static NEGATE: Negate = Negate;

impl Function for Negate {
    fn keys(&self) -> &'static [&'static str] {
        &["neg", "negate"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_unary("neg", args, |n| -n)
    }
}

pub struct Absolute;

pub static ABSOLUTE: Absolute = Absolute;

impl Function for Absolute {
    fn keys(&self) -> &'static [&'static str] {
        &["abs"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        numeric_unary("abs", args, f64::abs)
    }
}
