//! Member entity - a user's membership in a guild

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::Overlay;

/// Guild member
///
/// `roles` holds role ids by value only. They are not checked against the
/// guild's role collection and may outlive the roles they name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub guild_id: String,
    pub user_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Member {
    /// Create a member with its identity fields set and nothing else
    pub fn new(guild_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Create a member that joined the guild just now
    pub fn joined(guild_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            joined_at: Some(Utc::now()),
            ..Self::new(guild_id, user_id)
        }
    }

    #[inline]
    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles.iter().any(|id| id == role_id)
    }

    /// Append a role id; duplicates are kept
    pub fn assign_role(&mut self, role_id: impl Into<String>) {
        self.roles.push(role_id.into());
    }

    /// Remove the first occurrence of a role id
    ///
    /// Returns `false` when the member did not carry it.
    pub fn unassign_role(&mut self, role_id: &str) -> bool {
        match self.roles.iter().position(|id| id == role_id) {
            Some(pos) => {
                self.roles.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Overlay for Member {
    const IDENTITY_FIELDS: &'static [&'static str] = &["guild_id", "user_id"];
}
