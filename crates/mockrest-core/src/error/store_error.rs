//! Store errors - failures raised by resource store operations

use thiserror::Error;

/// Resource store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Guild not found: {0}")]
    GuildNotFound(String),

    #[error("Role {role_id} not found in guild {guild_id}")]
    RoleNotFound { guild_id: String, role_id: String },

    #[error("Member {user_id} not found in guild {guild_id}")]
    MemberNotFound { guild_id: String, user_id: String },

    #[error("Invalid guild {guild_id}: {reason}")]
    InvalidGuild { guild_id: String, reason: String },
}

impl StoreError {
    pub(crate) fn role_not_found(guild_id: &str, role_id: &str) -> Self {
        Self::RoleNotFound {
            guild_id: guild_id.to_string(),
            role_id: role_id.to_string(),
        }
    }

    pub(crate) fn member_not_found(guild_id: &str, user_id: &str) -> Self {
        Self::MemberNotFound {
            guild_id: guild_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    pub(crate) fn invalid_guild(guild_id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidGuild {
            guild_id: guild_id.to_string(),
            reason: reason.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GuildNotFound(_) => "UNKNOWN_GUILD",
            Self::RoleNotFound { .. } => "UNKNOWN_ROLE",
            Self::MemberNotFound { .. } => "UNKNOWN_MEMBER",
            Self::InvalidGuild { .. } => "INVALID_GUILD",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuildNotFound(_) | Self::RoleNotFound { .. } | Self::MemberNotFound { .. }
        )
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
