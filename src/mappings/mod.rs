//! Lookup tables joined against parsed bindings
//!
//! Both tables are JSON files maintained alongside the tool:
//! - `ActionMappings.json` translates action codes into display names
//! - `DeviceMappings/*.json` translate device/control ids into labels,
//!   one file per controller profile

pub mod action;
pub mod device;

pub use action::ActionMapping;
pub use device::{DeviceControlMap, DeviceMap, load_device_maps, select_device_map};

use crate::error::{MappingError, MappingResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::Path;

/// Case-insensitive comparison for codes and identifiers
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a JSON document, mapping a top-level `null` to `T::default()`.
///
/// Object keys matching one of `fields` ignoring case are renamed to that
/// spelling before deserialization.
pub(crate) fn read_json<T>(path: &Path, fields: &[&str]) -> MappingResult<T>
where
    T: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &content, fields)
}

pub(crate) fn parse_json<T>(path: &Path, content: &str, fields: &[&str]) -> MappingResult<T>
where
    T: DeserializeOwned + Default,
{
    let format_err = |source| MappingError::Format {
        path: path.to_path_buf(),
        source,
    };
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let value: Value = serde_json::from_str(content).map_err(format_err)?;
    serde_json::from_value::<Option<T>>(fold_keys(value, fields))
        .map(Option::unwrap_or_default)
        .map_err(format_err)
}

/// Rewrite object keys to their canonical field spelling, at every depth.
/// When two keys fold to the same field the later one wins.
fn fold_keys(value: Value, fields: &[&str]) -> Value {
    match value {
        Value::Object(map) => {
            let mut folded = Map::with_capacity(map.len());
            for (key, value) in map {
                let key = fields
                    .iter()
                    .find(|field| eq_ignore_case(field, &key))
                    .map_or(key, |field| field.to_string());
                folded.insert(key, fold_keys(value, fields));
            }
            Value::Object(folded)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| fold_keys(v, fields)).collect())
        }
        other => other,
    }
}
