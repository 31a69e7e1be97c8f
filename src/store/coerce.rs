//! Loose JSON coercion
//!
//! Request bodies identify records with whatever JSON the client sent: `3`,
//! `"3"`, `" 3 "` and `3.0` all address record 3. Numbers compare by value,
//! strings are trimmed and parsed (an empty string reads as 0), booleans read
//! as 1/0. `null`, arrays and objects never match.
//!
//! Order totals use the same reading for prices and quantities, except that
//! `null` counts as 0 and anything unreadable poisons the sum as NaN.

use serde_json::Value;

/// Numeric value a JSON scalar coerces to, if any
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether `key` addresses the record whose id is `id`
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn loosely_equals(key: &Value, id: i64) -> bool {
    numeric(key).is_some_and(|k| k == id as f64)
}

/// Extract the `id` member of a request body, `Null` when absent
pub fn id_of(body: &Value) -> &Value {
    body.get("id").unwrap_or(&Value::Null)
}

/// Operand for arithmetic on a possibly missing field
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Null) => 0.0,
        Some(v) => numeric(v).unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Whether a client value counts as "given": not null, false, 0 or ""
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
