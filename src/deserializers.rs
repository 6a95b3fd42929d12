//! Custom deserializers for the loosely-shaped JSON a generative model returns.
//!
//! The model is asked for a fixed document shape but is free to drift from it:
//! a tagline list may come back as one string, a text field as a number. These
//! deserializers coerce the common drifts into the typed shape instead of
//! failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Converts a scalar JSON value into text.
///
/// * **String**: returned as-is
/// * **Number / Bool**: their JSON text (`4`, `true`)
/// * **Null**: `None`
/// * **Array / Object**: compact JSON text, so nothing the model said is dropped
pub fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Deserializes an optional text field, accepting any JSON scalar.
pub fn de_option_text_forgiving<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Value>::deserialize(deserializer)?;
    Ok(opt.and_then(value_to_text))
}

/// Deserializes a text field that defaults to empty when null or absent
/// (pair with `#[serde(default)]`).
pub fn de_text_forgiving<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_option_text_forgiving(deserializer)?.unwrap_or_default())
}

/// Deserializes an optional list of strings.
///
/// # Accepted Formats
///
/// * **Array**: `["a", "b"]`; non-string items are converted with [`value_to_text`]
///   and `null` items are skipped
/// * **Single string**: `"a"` → `["a"]`
/// * **Null**: `None`
///
/// # Errors
///
/// Returns an error for numbers, booleans and objects at the top level.
pub fn de_option_string_list_forgiving<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt = Option::<Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    match v {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(vec![s])),
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(value_to_text).collect())),
        other => Err(D::Error::custom(format!(
            "expected a list of strings, got {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
