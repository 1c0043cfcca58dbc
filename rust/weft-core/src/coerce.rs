//! Coercion primitives shared by every operator.
//!
//! These reproduce the browser runtime's loose-typing rules: the same
//! value reads as a number, a boolean, or text depending on which
//! branch an operator takes. String coercion has two registers because
//! `null` renders as `"null"` when concatenated but as the empty
//! string when formatted.

use crate::linearize;
use crate::values::Value;

/// Numeric reading of a value.
///
/// Strings parse as floating-point literals after trimming; the empty
/// string is 0 and anything unparsable is NaN. Lists, maps, and
/// objects never have a numeric reading.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Boolean(true) => 1.0,
        Value::Boolean(false) => 0.0,
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        Value::List(_) | Value::Map(_) | Value::Object(_) => f64::NAN,
    }
}

/// Boolean reading of a value.
///
/// Only emptiness matters for strings: `"false"` and `"0"` are truthy.
/// Lists, maps, and objects are always true, even when empty.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::List(_) | Value::Map(_) | Value::Object(_) => true,
    }
}

/// Text reading used when a value is concatenated as an operand:
/// null contributes the text `"null"`.
pub fn concat_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => stringify(other),
    }
}

/// Text reading used when a value stands alone in formatting:
/// null contributes nothing.
pub fn format_string(value: &Value) -> String {
    stringify(value)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::List(list) => linearize::linearize(list),
        Value::Map(_) | Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render a double the way the browser runtime does: shortest
/// round-trippable decimal form, whole values without a fractional
/// part, and negative zero kept visible.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        if n.is_sign_negative() { "-0" } else { "0" }.to_string()
    } else {
        format!("{n}")
    }
}

/// Parse a string operand as a number.
///
/// Accepts what the browser runtime accepts: surrounding whitespace,
/// `Infinity` spellings, unsigned `0x` hex integers, and decimal float
/// literals. The empty string is 0. Rust-only spellings (`inf`,
/// `nan`) and anything else unparsable come back as NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return match u64::from_str_radix(hex, 16) {
            Ok(v) => v as f64,
            Err(_) => f64::NAN,
        };
    }
    // f64::from_str would accept "inf" and "NaN"; the browser runtime
    // does not. 'e'/'E' stay allowed for exponents.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::OpaqueObject;
    use std::collections::BTreeMap;

    #[derive(Debug)]
    struct Host;
    impl OpaqueObject for Host {}

    #[test]
    fn test_to_number_scalars() {
        assert_eq!(to_number(&Value::Null), 0.0);
        assert_eq!(to_number(&Value::Boolean(true)), 1.0);
        assert_eq!(to_number(&Value::Boolean(false)), 0.0);
        assert_eq!(to_number(&Value::Number(3.1)), 3.1);
        assert_eq!(to_number(&Value::String("  2.5 ".into())), 2.5);
        assert_eq!(to_number(&Value::String(String::new())), 0.0);
        assert!(to_number(&Value::String("5o".into())).is_nan());
    }

    #[test]
    fn test_to_number_containers_are_nan() {
        assert!(to_number(&Value::list(vec![Value::Number(1.0)])).is_nan());
        assert!(to_number(&Value::Map(BTreeMap::new())).is_nan());
        assert!(to_number(&Value::object(Host)).is_nan());
    }

    #[test]
    fn test_parse_number_edges() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_number("0x10"), 16.0);
        assert_eq!(parse_number("0X10"), 16.0);
        assert_eq!(parse_number("-0"), 0.0);
        assert!(parse_number("-0").is_sign_negative());
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("3."), 3.0);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("-0x10").is_nan());
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("e5").is_nan());
    }

    #[test]
    fn test_to_boolean() {
        assert!(!to_boolean(&Value::Null));
        assert!(!to_boolean(&Value::Number(0.0)));
        assert!(!to_boolean(&Value::Number(-0.0)));
        assert!(!to_boolean(&Value::Number(f64::NAN)));
        assert!(to_boolean(&Value::Number(0.1)));
        assert!(!to_boolean(&Value::String(String::new())));
        assert!(to_boolean(&Value::String("false".into())));
        assert!(to_boolean(&Value::String("0".into())));
        assert!(to_boolean(&Value::list(vec![])));
        assert!(to_boolean(&Value::Map(BTreeMap::new())));
        assert!(to_boolean(&Value::object(Host)));
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "-0");
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(123.4), "123.4");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_null_registers_differ() {
        assert_eq!(concat_string(&Value::Null), "null");
        assert_eq!(format_string(&Value::Null), "");
    }

    #[test]
    fn test_container_tokens() {
        assert_eq!(concat_string(&Value::Map(BTreeMap::new())), "[object Object]");
        assert_eq!(format_string(&Value::object(Host)), "[object Object]");
    }
}
