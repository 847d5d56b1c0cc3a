//! Field readers for service payloads that may carry `null` or the wrong JSON
//! type anywhere. Each reader falls back to the field's empty value and logs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::portfolio::domain::entities::json_kind;

/// A string field; `null` and non-strings read as `""`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => {
            warn!(kind = json_kind(&other), "Expected a string, using empty");
            String::new()
        }
    })
}

/// An optional flag; anything but a bool reads as unset.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(flag),
        Value::Null => None,
        other => {
            warn!(kind = json_kind(&other), "Expected a bool, treating as unset");
            None
        }
    })
}

/// A list field; unreadable elements are dropped one by one, a non-list reads as empty.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => read_list(items),
        Value::Null => Vec::new(),
        other => {
            warn!(kind = json_kind(&other), "Expected a list, using empty");
            Vec::new()
        }
    })
}

/// Reads every element that fits `T` and skips the rest.
pub(crate) fn read_list<T>(items: Vec<Value>) -> Vec<T>
where
    T: DeserializeOwned,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let kind = json_kind(&item);
            serde_json::from_value(item)
                .map_err(|err| warn!(position, kind, error = %err, "Skipping unreadable list element"))
                .ok()
        })
        .collect()
}
