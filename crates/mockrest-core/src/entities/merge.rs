//! Field-level overlay of a JSON document onto a stored record
//!
//! PATCH bodies are applied key by key: every top-level key present in the
//! body replaces the matching field, absent keys leave the record as it was.
//! Identity keys are never taken from the body.

use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::Value;

/// Records that accept a JSON overlay
pub trait Overlay: Serialize + DeserializeOwned {
    /// Keys that identify the record and are ignored in an overlay
    const IDENTITY_FIELDS: &'static [&'static str];

    /// Produce a copy of `self` with the fields of `patch` applied
    fn overlay(&self, patch: &[u8]) -> Result<Self, serde_json::Error> {
        let patch: Value = serde_json::from_slice(patch)?;
        let Value::Object(patch) = patch else {
            return Err(serde_json::Error::custom("expected a JSON object"));
        };

        let mut current = serde_json::to_value(self)?;
        let Some(fields) = current.as_object_mut() else {
            return Err(serde_json::Error::custom("record is not a JSON object"));
        };

        for (key, value) in patch {
            if Self::IDENTITY_FIELDS.contains(&key.as_str()) {
                continue;
            }
            fields.insert(key, value);
        }

        serde_json::from_value(current)
    }
}
