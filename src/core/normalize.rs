use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalize a list-like field into an ordered list of strings.
///
/// The gateway stores `features`/`applications` as a real array, a JSON-encoded array
/// string, or a comma separated string. Arrays pass through (non-string items are
/// rendered as JSON text), JSON array strings are decoded, other text is split on
/// commas with blank pieces dropped. `null`, numbers, booleans and objects yield an
/// empty list.
pub fn normalize_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().map(item_text).collect(),
        Value::String(text) if text.is_empty() => Vec::new(),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => items.iter().map(item_text).collect(),
            _ => text
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        },
        _ => Vec::new(),
    }
}

fn item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize_list(&raw))
}

/// Text fields arrive as strings, numbers (prices) or `null`.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
