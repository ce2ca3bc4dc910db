//! Explicit parsing of loosely-typed input fields.
//!
//! Raw records come from form submissions and from whatever happens to be
//! sitting in the store, so every field arrives as a `serde_json::Value`.
//! Each function here documents which shapes it accepts and the sentinel
//! it returns for everything else. None of them fail.

use serde_json::Value;

/// Text field.
///
/// - string: taken as is
/// - number / bool: their JSON text (`42`, `4.5`, `true`)
/// - null, array, object: empty string
///
/// Trimming is left to the caller.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Rating field.
///
/// - number: its `f64` value
/// - string: parsed after trimming (`" 3.5 "` is `3.5`)
/// - anything else: `None`
///
/// Non-finite results (`NaN`, `inf`) are `None`.
pub fn rating(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    parsed.is_finite().then_some(parsed)
}

/// Identifier field. Sentinel: `0`.
///
/// - non-negative integer: as is
/// - positive finite float: its integer part
/// - string: parsed as one of the above after trimming
/// - anything else (negative, non-numeric, null, bool): `0`
pub fn id(value: &Value) -> u64 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => v,
            None => n.as_f64().map(float_id).unwrap_or(0),
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(v) => v,
                Err(_) => s.parse::<f64>().map(float_id).unwrap_or(0),
            }
        }
        _ => 0,
    }
}

fn float_id(value: f64) -> u64 {
    if value.is_finite() && value >= 1.0 {
        // `as` saturates at u64::MAX
        value.trunc() as u64
    } else {
        0
    }
}
