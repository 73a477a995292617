//! Member handlers
//!
//! Endpoints for guild member management and role assignment.

use axum::extract::State;
use mockrest_core::{Member, Overlay, StoreError};
use tracing::{debug, info};

use crate::extractors::{ApiPath, GuildIdPath, GuildUserPath, MemberRolePath, RawBody};
use crate::response::{ApiError, ApiJson, ApiResult, Empty};
use crate::state::AppState;

/// Get guild members
///
/// GET /guilds/{guild_id}/members
pub async fn get_guild_members(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildIdPath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(&store.guild(&path.guild_id)?.members))
}

/// Get guild member by user ID
///
/// GET /guilds/{guild_id}/members/{user_id}
pub async fn get_guild_member(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildUserPath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(store.member(&path.guild_id, &path.user_id)?))
}

/// Get the role ids assigned to a member
///
/// GET /guilds/{guild_id}/members/{user_id}/roles
pub async fn get_member_roles(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildUserPath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(&store.member(&path.guild_id, &path.user_id)?.roles))
}

/// Get one of a member's roles
///
/// GET /guilds/{guild_id}/members/{user_id}/roles/{role_id}
///
/// Resolves to the guild's role record, and is not found when the member does
/// not carry the role or the role no longer exists.
pub async fn get_member_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<MemberRolePath>,
) -> ApiResult<ApiJson> {
    state.store().read(|store| {
        let member = store.member(&path.guild_id, &path.user_id)?;
        if !member.has_role(&path.role_id) {
            return Err(StoreError::RoleNotFound {
                guild_id: path.guild_id.clone(),
                role_id: path.role_id.clone(),
            }
            .into());
        }
        ApiJson::encode(store.role(&path.guild_id, &path.role_id)?)
    })
}

/// Add a member to a guild
///
/// POST /guilds/{guild_id}/members
///
/// The member's user id is generated and its guild id taken from the path;
/// any request body is ignored.
pub async fn create_member(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildIdPath>,
) -> ApiResult<ApiJson> {
    let member = state.store().write(|store| {
        let guild_id = store.guild(&path.guild_id)?.id.clone();
        let member = Member::joined(guild_id, state.generate_id());

        store.member_add(member.clone())?;
        store.guild_mut(&member.guild_id)?.member_count += 1;

        Ok::<_, StoreError>(member)
    })?;

    info!(guild_id = %member.guild_id, user_id = %member.user_id, "Member created");

    ApiJson::encode(&member)
}

/// Update guild member
///
/// PATCH /guilds/{guild_id}/members/{user_id}
pub async fn update_guild_member(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildUserPath>,
    RawBody(body): RawBody,
) -> ApiResult<ApiJson> {
    let member = state.store().write(|store| {
        let member = store
            .member(&path.guild_id, &path.user_id)?
            .overlay(&body)
            .map_err(ApiError::Decode)?;
        store.member_add(member.clone())?;
        Ok::<_, ApiError>(member)
    })?;

    info!(guild_id = %member.guild_id, user_id = %member.user_id, "Member updated");

    ApiJson::encode(&member)
}

/// Remove member from guild
///
/// DELETE /guilds/{guild_id}/members/{user_id}
pub async fn remove_guild_member(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildUserPath>,
) -> ApiResult<Empty> {
    state.store().write(|store| {
        let member = store.member(&path.guild_id, &path.user_id)?.clone();
        store.member_remove(&member)?;

        let guild = store.guild_mut(&member.guild_id)?;
        guild.member_count = guild.member_count.saturating_sub(1);

        Ok::<_, StoreError>(())
    })?;

    info!(guild_id = %path.guild_id, user_id = %path.user_id, "Member removed");

    Ok(Empty)
}

/// Assign a role to a member
///
/// PUT /guilds/{guild_id}/members/{user_id}/roles/{role_id}
///
/// The role id is appended as given; it is neither deduplicated nor checked
/// against the guild's roles.
pub async fn add_member_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<MemberRolePath>,
) -> ApiResult<Empty> {
    state.store().write(|store| {
        let mut member = store.member(&path.guild_id, &path.user_id)?.clone();
        member.assign_role(path.role_id.as_str());
        store.member_add(member)
    })?;

    info!(
        guild_id = %path.guild_id,
        user_id = %path.user_id,
        role_id = %path.role_id,
        "Role assigned to member"
    );

    Ok(Empty)
}

/// Unassign a role from a member
///
/// DELETE /guilds/{guild_id}/members/{user_id}/roles/{role_id}
///
/// Succeeds without change when the member does not carry the role.
pub async fn remove_member_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<MemberRolePath>,
) -> ApiResult<Empty> {
    let removed = state.store().write(|store| {
        let mut member = store.member(&path.guild_id, &path.user_id)?.clone();
        if !member.unassign_role(&path.role_id) {
            return Ok(false);
        }
        store.member_add(member)?;
        Ok::<_, StoreError>(true)
    })?;

    if removed {
        info!(
            guild_id = %path.guild_id,
            user_id = %path.user_id,
            role_id = %path.role_id,
            "Role unassigned from member"
        );
    } else {
        debug!(user_id = %path.user_id, role_id = %path.role_id, "Member did not carry role");
    }

    Ok(Empty)
}
