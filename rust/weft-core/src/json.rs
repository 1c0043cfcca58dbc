//! Bridge from the binding resolver's JSON data into values.

use std::collections::BTreeMap;

use crate::values::Value;

impl Value {
    /// Convert attribute data held as JSON into an evaluator value.
    ///
    /// Arrays become fresh (necessarily acyclic) lists, objects become
    /// maps, and every number collapses onto the evaluator's double
    /// representation.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::list(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from_json(value)))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }
}
