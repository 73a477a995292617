//! Role entity - a named permission tag scoped to one guild

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::Overlay;

/// Guild role
///
/// Only `id` is guaranteed to be populated. Every other field stays absent
/// until a client sets it through an update, and absent fields are omitted
/// from the wire representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Permission bitfield, kept in its string wire form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
    /// Fields this emulator does not model, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Role {
    /// Create a role with only its id populated
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder-style name setter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Overlay for Role {
    const IDENTITY_FIELDS: &'static [&'static str] = &["id"];
}
