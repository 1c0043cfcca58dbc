//! Named function registry.
//!
//! Built once at first use and never mutated afterwards, so lookups
//! need no locking. The expression compiler resolves operator names
//! through [`lookup`]; [`evaluate`] is the dispatch convenience for
//! callers holding a name and already-resolved operands.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use weft_core::Value;

use crate::error::ExprError;
use crate::function::Function;
use crate::functions;

/// Every operator in the library.
static FUNCTIONS: &[&dyn Function] = &[
    &functions::ADD,
    &functions::SUBTRACT,
    &functions::MULTIPLY,
    &functions::DIVIDE,
    &functions::MODULUS,
    &functions::NEGATE,
    &functions::ABSOLUTE,
    &functions::EQUALS,
    &functions::NOTEQUALS,
    &functions::GREATER_THAN,
    &functions::GREATER_THAN_OR_EQUAL,
    &functions::LESS_THAN,
    &functions::LESS_THAN_OR_EQUAL,
    &functions::AND,
    &functions::OR,
    &functions::NOT,
    &functions::TERNARY,
    &functions::EMPTY,
    &functions::FORMAT,
];

static BY_KEY: Lazy<HashMap<&'static str, &'static dyn Function>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for function in FUNCTIONS {
        for key in function.keys() {
            map.insert(*key, *function);
        }
    }
    map
});

/// Resolve an operator by registry key, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static dyn Function> {
    if let Some(function) = BY_KEY.get(name) {
        return Some(*function);
    }
    BY_KEY.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Dispatch `name` over already-resolved operand values.
pub fn evaluate(name: &str, args: &[Value]) -> Result<Value, ExprError> {
    match lookup(name) {
        Some(function) => function.evaluate(args),
        None => Err(ExprError::UnknownFunction(name.to_string())),
    }
}

/// All registered functions, for callers that enumerate the library.
pub fn all() -> impl Iterator<Item = &'static dyn Function> {
    FUNCTIONS.iter().copied()
}
