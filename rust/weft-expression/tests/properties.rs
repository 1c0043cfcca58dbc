//! Property tests for the algebraic guarantees the operator library
//! makes, over randomly drawn operands.

use proptest::prelude::*;

use weft_expression::functions::{
    ADD, EMPTY, EQUALS, GREATER_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN, LESS_THAN_OR_EQUAL,
    NEGATE, SUBTRACT,
};
use weft_expression::{Function, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn unwrap_bool(result: Value) -> bool {
    match result {
        Value::Boolean(b) => b,
        other => panic!("expected a boolean, got {other:?}"),
    }
}

/// A sampling of every variant, for properties quantified over the
/// whole value space.
fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Number),
        ".{0,12}".prop_map(Value::from),
        proptest::collection::vec(any::<f64>().prop_map(Value::Number), 0..4)
            .prop_map(Value::list),
    ]
}

proptest! {
    #[test]
    fn subtract_matches_add_of_negation(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        let direct = SUBTRACT.evaluate(&[num(a), num(b)]).unwrap();
        let negated = NEGATE.evaluate(&[num(b)]).unwrap();
        let composed = ADD.evaluate(&[num(a), negated]).unwrap();
        prop_assert_eq!(direct, composed);
    }

    #[test]
    fn equals_is_reflexive_except_nan(value in any_value()) {
        let expected = !matches!(value, Value::Number(n) if n.is_nan());
        let reflexive = EQUALS.evaluate(&[value.clone(), value]).unwrap();
        prop_assert_eq!(unwrap_bool(reflexive), expected);
    }

    #[test]
    fn empty_holds_only_for_null_blank_and_empty_list(value in any_value()) {
        let expected = match &value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::List(list) => list.is_empty(),
            _ => false,
        };
        let emptiness = EMPTY.evaluate(&[value]).unwrap();
        prop_assert_eq!(unwrap_bool(emptiness), expected);
    }

    #[test]
    fn number_survives_a_string_round_trip(n in any::<f64>()) {
        prop_assume!(n.is_finite() && n != 0.0);
        let rendered = weft_core::coerce::number_to_string(n);
        let reparsed = weft_core::coerce::to_number(&Value::String(rendered));
        prop_assert_eq!(reparsed, n);
    }

    #[test]
    fn relations_are_never_true_under_nan(value in any_value()) {
        for relation in [
            &GREATER_THAN as &dyn Function,
            &GREATER_THAN_OR_EQUAL,
            &LESS_THAN,
            &LESS_THAN_OR_EQUAL,
        ] {
            let left = relation
                .evaluate(&[num(f64::NAN), value.clone()])
                .unwrap();
            let right = relation
                .evaluate(&[value.clone(), num(f64::NAN)])
                .unwrap();
            prop_assert!(!unwrap_bool(left));
            prop_assert!(!unwrap_bool(right));
        }
    }

    #[test]
    fn add_with_a_string_operand_always_concatenates(n in any::<f64>(), text in ".{0,12}") {
        let result = ADD.evaluate(&[num(n), Value::from(text.as_str())]).unwrap();
        let expected = format!("{}{}", weft_core::coerce::number_to_string(n), text);
        prop_assert_eq!(result, Value::from(expected));
    }
}
