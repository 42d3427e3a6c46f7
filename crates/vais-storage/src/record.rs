//! JSON record helpers on top of [`KeyValueStore`].
//!
//! Records are plain JSON objects. [`merge_patch`] applies the spread
//! semantics `{...existing, ...patch}`: top-level keys in the patch replace
//! the existing ones and everything else is kept. [`merge_record`] does the
//! same for a typed record and never persists an object that fails to decode.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::traits::KeyValueStore;
use crate::{Error, Result};

/// Load and deserialize the record under `key`.
///
/// Returns `Ok(None)` when the key is absent and `Err(Error::Parse)` when the
/// stored value cannot be decoded as `T`.
pub fn load_record<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| Error::parse(key, e)),
    }
}

/// Serialize `record` and store it under `key`, replacing any previous value.
pub fn save_record<T, S>(store: &S, key: &str, record: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(record)?;
    store.set(key, &raw)
}

/// Shallow-merge `patch` over the object stored under `key` and persist it.
///
/// An absent, corrupt or non-object stored value is treated as `{}`; the
/// corruption is logged and then overwritten. Returns the merged object.
pub fn merge_patch<P, S>(store: &S, key: &str, patch: &P) -> Result<Map<String, Value>>
where
    P: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let patch = match serde_json::to_value(patch)? {
        Value::Object(map) => map,
        _ => {
            return Err(Error::InvalidPatch {
                key: key.to_string(),
            });
        }
    };

    let mut current = match load_record::<Value, _>(store, key) {
        Ok(Some(Value::Object(map))) => map,
        Ok(Some(other)) => {
            tracing::warn!(key, found = %type_name(&other), "stored record is not an object, replacing");
            Map::new()
        }
        Ok(None) => Map::new(),
        Err(e) if e.is_corrupt_data() => {
            tracing::warn!(key, error = %e, "stored record is corrupt, replacing");
            Map::new()
        }
        Err(e) => return Err(e),
    };

    merge_objects(&mut current, patch);
    save_record(store, key, &current)?;
    Ok(current)
}

/// Shallow-merge `patch` over the record of type `T` stored under `key`.
///
/// A stored value that does not decode as `T` (including a well-formed object
/// with a wrong-typed field) is logged and replaced by `{}` before merging.
/// The merged object is decoded as `T` before anything is written, so a
/// failed merge leaves the store untouched. Unknown keys are kept.
pub fn merge_record<T, P, S>(store: &S, key: &str, patch: &P) -> Result<T>
where
    T: DeserializeOwned,
    P: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let patch = match serde_json::to_value(patch)? {
        Value::Object(map) => map,
        _ => {
            return Err(Error::InvalidPatch {
                key: key.to_string(),
            });
        }
    };

    let mut current = match load_record::<Value, _>(store, key) {
        Ok(Some(Value::Object(map))) => {
            match serde_json::from_value::<T>(Value::Object(map.clone())) {
                Ok(_) => map,
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored record does not decode, replacing");
                    Map::new()
                }
            }
        }
        Ok(Some(other)) => {
            tracing::warn!(key, found = %type_name(&other), "stored record is not an object, replacing");
            Map::new()
        }
        Ok(None) => Map::new(),
        Err(e) if e.is_corrupt_data() => {
            tracing::warn!(key, error = %e, "stored record is corrupt, replacing");
            Map::new()
        }
        Err(e) => return Err(e),
    };

    merge_objects(&mut current, patch);
    let record = serde_json::from_value(Value::Object(current.clone()))
        .map_err(|e| Error::parse(key, e))?;
    save_record(store, key, &current)?;
    Ok(record)
}

/// Apply `patch` over `base`, top-level keys only.
pub fn merge_objects(base: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (k, v) in patch {
        base.insert(k, v);
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
