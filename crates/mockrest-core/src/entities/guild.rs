//! Guild entity - the top-level container owning roles and members

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Member, Role};

/// Guild (server) entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Cached member total, maintained by the member endpoints
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Guild {
    /// Create an empty guild
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

    pub(crate) fn role_position(&self, role_id: &str) -> Option<usize> {
        self.roles.iter().position(|r| r.id == role_id)
    }

    pub(crate) fn member_position(&self, user_id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.user_id == user_id)
    }
}
