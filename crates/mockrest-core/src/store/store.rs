//! Guild store - owns every guild and the roles and members nested in it

use std::collections::HashSet;

use tracing::debug;

use crate::entities::{Guild, Member, Role};
use crate::error::{StoreError, StoreResult};

/// In-memory guild store
///
/// Roles and members are only reachable through their owning guild. Lookups
/// hand out borrowed views; changes go through the `*_add` / `*_remove`
/// operations, which either apply fully or leave the store untouched.
#[derive(Debug, Clone, Default)]
pub struct Store {
    guilds: Vec<Guild>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with guilds
    ///
    /// Later guilds replace earlier ones that share an id. Fails on the first
    /// guild that `guild_add` rejects.
    pub fn with_guilds(guilds: impl IntoIterator<Item = Guild>) -> StoreResult<Self> {
        let mut store = Self::new();
        for guild in guilds {
            store.guild_add(guild)?;
        }
        Ok(store)
    }

    /// All guilds, in insertion order
    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    /// Insert a guild, or replace the one with the same id
    ///
    /// Members must belong to the guild, and role ids and member user ids must
    /// be unique within it. `member_count` is reset to the number of members.
    pub fn guild_add(&mut self, mut guild: Guild) -> StoreResult<()> {
        check_guild(&guild)?;
        guild.member_count = guild.members.len() as u64;

        match self.guilds.iter_mut().find(|g| g.id == guild.id) {
            Some(existing) => *existing = guild,
            None => self.guilds.push(guild),
        }

        Ok(())
    }

    pub fn guild(&self, guild_id: &str) -> StoreResult<&Guild> {
        self.guilds
            .iter()
            .find(|g| g.id == guild_id)
            .ok_or_else(|| StoreError::GuildNotFound(guild_id.to_string()))
    }

    /// Mutable access to a live guild record
    pub fn guild_mut(&mut self, guild_id: &str) -> StoreResult<&mut Guild> {
        self.guilds
            .iter_mut()
            .find(|g| g.id == guild_id)
            .ok_or_else(|| StoreError::GuildNotFound(guild_id.to_string()))
    }

    pub fn role(&self, guild_id: &str, role_id: &str) -> StoreResult<&Role> {
        self.guild(guild_id)?
            .roles
            .iter()
            .find(|r| r.id == role_id)
            .ok_or_else(|| StoreError::role_not_found(guild_id, role_id))
    }

    pub fn member(&self, guild_id: &str, user_id: &str) -> StoreResult<&Member> {
        self.guild(guild_id)?
            .members
            .iter()
            .find(|m| m.user_id == user_id)
            .ok_or_else(|| StoreError::member_not_found(guild_id, user_id))
    }

    /// Insert a role into a guild, or fully replace the one with the same id
    pub fn role_add(&mut self, guild_id: &str, role: Role) -> StoreResult<()> {
        let guild = self.guild_mut(guild_id)?;

        match guild.role_position(&role.id) {
            Some(pos) => {
                debug!(guild_id, role_id = %role.id, "Replacing role");
                guild.roles[pos] = role;
            }
            None => {
                debug!(guild_id, role_id = %role.id, "Inserting role");
                guild.roles.push(role);
            }
        }

        Ok(())
    }

    /// Remove a role, keeping the remaining roles in order
    ///
    /// Members that list the role id are left as they are.
    pub fn role_remove(&mut self, guild_id: &str, role_id: &str) -> StoreResult<()> {
        let guild = self.guild_mut(guild_id)?;
        let pos = guild
            .role_position(role_id)
            .ok_or_else(|| StoreError::role_not_found(guild_id, role_id))?;

        guild.roles.remove(pos);
        debug!(guild_id, role_id, "Removed role");

        Ok(())
    }

    /// Insert a member into its guild, or fully replace the one with the same user id
    pub fn member_add(&mut self, member: Member) -> StoreResult<()> {
        let guild = self.guild_mut(&member.guild_id)?;

        match guild.member_position(&member.user_id) {
            Some(pos) => {
                debug!(guild_id = %member.guild_id, user_id = %member.user_id, "Replacing member");
                guild.members[pos] = member;
            }
            None => {
                debug!(guild_id = %member.guild_id, user_id = %member.user_id, "Inserting member");
                guild.members.push(member);
            }
        }

        Ok(())
    }

    /// Remove a member from its guild by user id
    pub fn member_remove(&mut self, member: &Member) -> StoreResult<()> {
        let guild = self.guild_mut(&member.guild_id)?;
        let pos = guild
            .member_position(&member.user_id)
            .ok_or_else(|| StoreError::member_not_found(&member.guild_id, &member.user_id))?;

        guild.members.remove(pos);
        debug!(guild_id = %member.guild_id, user_id = %member.user_id, "Removed member");

        Ok(())
    }
}

fn check_guild(guild: &Guild) -> StoreResult<()> {
    let mut role_ids = HashSet::new();
    if let Some(role) = guild.roles.iter().find(|r| !role_ids.insert(r.id.as_str())) {
        return Err(StoreError::invalid_guild(
            &guild.id,
            format!("duplicate role id {}", role.id),
        ));
    }

    let mut user_ids = HashSet::new();
    for member in &guild.members {
        if member.guild_id != guild.id {
            return Err(StoreError::invalid_guild(
                &guild.id,
                format!("member {} belongs to guild {}", member.user_id, member.guild_id),
            ));
        }
        if !user_ids.insert(member.user_id.as_str()) {
            return Err(StoreError::invalid_guild(
                &guild.id,
                format!("duplicate member user id {}", member.user_id),
            ));
        }
    }

    Ok(())
}
