//! Deep equality over decoded JSON

use serde_json::{Number, Value};

/// How expected and actual payloads are compared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Equality {
    /// Maps compare by key and value regardless of key order, sequences compare
    /// element-wise in order, numbers compare by value, and numeric strings
    /// equal the number they spell
    #[default]
    Canonical,
    /// Exact [`Value`] equality
    Strict,
}

impl Equality {
    /// Compares `expected` against `actual` under this mode
    pub fn matches(self, expected: &Value, actual: &Value) -> bool {
        match self {
            Equality::Canonical => canonical_eq(expected, actual),
            Equality::Strict => expected == actual,
        }
    }
}

fn canonical_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| canonical_eq(value, other)))
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(value, other)| canonical_eq(value, other))
        }
        (Value::Number(left), Value::Number(right)) => numbers_eq(left, right),
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => numeric_string_eq(number, text),
        _ => left == right,
    }
}

fn numbers_eq(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

fn numeric_string_eq(number: &Number, text: &str) -> bool {
    match (text.trim().parse::<f64>(), number.as_f64()) {
        (Ok(parsed), Some(number)) => parsed == number,
        _ => false,
    }
}
