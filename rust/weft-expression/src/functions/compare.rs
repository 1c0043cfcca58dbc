//! Equality and relational operators.
//!
//! Equality is the abstract, coercing kind: same-type operands compare
//! directly, null equals only null, and every other mixed pair
//! compares numerically. Relational operators compare two strings
//! ordinally by code point and everything else numerically; NaN makes
//! all four relations false.

use std::cmp::Ordering;

use weft_core::coerce::to_number;
use weft_core::Value;

use crate::error::ExprError;
use crate::function::{binary_args, Function};

fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        // NaN never equals NaN.
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        // Same-type containers compare by identity (maps by contents);
        // a list is always equal to itself, never to a twin.
        (Value::List(a), Value::List(b)) => a.id() == b.id(),
        (Value::Object(a), Value::Object(b)) => a.id() == b.id(),
        (Value::Map(a), Value::Map(b)) => a == b,
        _ => to_number(left) == to_number(right),
    }
}

fn loose_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => to_number(left).partial_cmp(&to_number(right)),
    }
}

pub struct Equals;

pub static EQUALS: Equals = Equals;

impl Function for Equals {
    fn keys(&self) -> &'static [&'static str] {
        &["eq", "equals"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("eq", args)?;
        Ok(Value::Boolean(loose_eq(left, right)))
    }
}

pub struct NotEquals;

pub static NOTEQUALS: NotEquals = NotEquals;

impl Function for NotEquals {
    fn keys(&self) -> &'static [&'static str] {
        &["ne", "notequals"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("ne", args)?;
        Ok(Value::Boolean(!loose_eq(left, right)))
    }
}

pub struct GreaterThan;

pub static GREATER_THAN: GreaterThan = GreaterThan;

impl Function for GreaterThan {
    fn keys(&self) -> &'static [&'static str] {
        &["gt", "greaterthan"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("gt", args)?;
        Ok(Value::Boolean(matches!(
            loose_cmp(left, right),
            Some(Ordering::Greater)
        )))
    }
}

pub struct GreaterThanOrEqual;

pub static GREATER_THAN_OR_EQUAL: GreaterThanOrEqual = GreaterThanOrEqual;

impl Function for GreaterThanOrEqual {
    fn keys(&self) -> &'static [&'static str] {
        &["ge", "greaterthanorequal"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("ge", args)?;
        Ok(Value::Boolean(matches!(
            loose_cmp(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        )))
    }
}

pub struct LessThan;

pub static LESS_THAN: LessThan = LessThan;

impl Function for LessThan {
    fn keys(&self) -> &'static [&'static str] {
        &["lt", "lessthan"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("lt", args)?;
        Ok(Value::Boolean(matches!(
            loose_cmp(left, right),
            Some(Ordering::Less)
        )))
    }
}

pub struct LessThanOrEqual;

pub static LESS_THAN_OR_EQUAL: LessThanOrEqual = LessThanOrEqual;

impl Function for LessThanOrEqual {
    fn keys(&self) -> &'static [&'static str] {
        &["le", "lessthanorequal"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let (left, right) = binary_args("le", args)?;
        Ok(Value::Boolean(matches!(
            loose_cmp(left, right),
            Some(Ordering::Less | Ordering::Equal)
        )))
    }
}
