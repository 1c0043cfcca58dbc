//! Emptiness testing and positional string formatting.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use weft_core::coerce::format_string;
use weft_core::Value;

use crate::error::ExprError;
use crate::function::{unary_arg, Function};

/// Placeholder pattern for FORMAT templates: `{0}`, `{1}`, ...
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern"));

/// True only for null, the empty string, and the empty list.
///
/// Everything else is non-empty, including `0`, NaN, `false`, and
/// empty maps and objects.
pub struct Empty;

pub static EMPTY: Empty = Empty;

impl Function for Empty {
    fn keys(&self) -> &'static [&'static str] {
        &["empty"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let value = unary_arg("empty", args)?;
        Ok(Value::Boolean(match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::List(list) => list.is_empty(),
            _ => false,
        }))
    }
}

/// Positional substitution into a template string.
///
/// The first argument is the template; `{i}` is replaced by the
/// formatted reading of argument `i + 1`. Placeholders with no
/// corresponding argument stay verbatim, extra trailing arguments are
/// ignored, and a null or missing template yields the empty string.
pub struct Format;

pub static FORMAT: Format = Format;

impl Function for Format {
    fn keys(&self) -> &'static [&'static str] {
        &["format"]
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, ExprError> {
        let Some(template) = args.first() else {
            return Ok(Value::String(String::new()));
        };
        let template = format_string(template);
        let replaced = PLACEHOLDER.replace_all(&template, |caps: &Captures<'_>| {
            let argument = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_add(1))
                .and_then(|index| args.get(index));
            match argument {
                Some(value) => format_string(value),
                None => caps[0].to_string(),
            }
        });
        Ok(Value::String(replaced.into_owned()))
    }
}
