//! Tolerant field decoders for hand-edited content files.
//!
//! # Invariants
//! - A present but `null` or wrongly typed field decodes to its empty value,
//!   never to an error.
//! - Numbers used as text keep their JSON spelling (`7`, `7.5`).

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

fn number_text(number: &Number) -> String {
    match number.as_i64() {
        Some(value) => value.to_string(),
        None => number.as_f64().map_or_else(|| number.to_string(), |value| value.to_string()),
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number_text(&number)),
        _ => None,
    }
}

/// Text field; `null` and non-scalar values become `""`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional text field; `null`, empty and non-scalar values become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).filter(|text| !text.is_empty()))
}

/// List of text; non-arrays become empty and unusable elements are skipped.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(value_text).collect(),
        _ => Vec::new(),
    })
}

/// Calendar year given as a number or a numeric string.
pub fn optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = optional_number(Value::deserialize(deserializer)?)
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .and_then(|value| i32::try_from(value as i64).ok());
    Ok(year)
}

/// Duration given as a number or a numeric string.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(Value::deserialize(deserializer)?).filter(|value| value.is_finite()))
}

fn optional_number(value: Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
