//! Role handlers
//!
//! Endpoints for guild role management.

use axum::extract::State;
use mockrest_core::{Overlay, Role};
use tracing::info;

use crate::extractors::{ApiPath, GuildIdPath, GuildRolePath, RawBody};
use crate::response::{ApiError, ApiJson, ApiResult, Empty};
use crate::state::AppState;

/// Get guild roles
///
/// GET /guilds/{guild_id}/roles
pub async fn get_guild_roles(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildIdPath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(&store.guild(&path.guild_id)?.roles))
}

/// Get role by ID
///
/// GET /guilds/{guild_id}/roles/{role_id}
pub async fn get_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildRolePath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(store.role(&path.guild_id, &path.role_id)?))
}

/// Create role in guild
///
/// POST /guilds/{guild_id}/roles
///
/// The role gets a generated id and nothing else; any request body is ignored.
pub async fn create_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildIdPath>,
) -> ApiResult<ApiJson> {
    let role = Role::new(state.generate_id());

    state
        .store()
        .write(|store| store.role_add(&path.guild_id, role.clone()))?;

    info!(guild_id = %path.guild_id, role_id = %role.id, "Role created");

    ApiJson::encode(&role)
}

/// Update role
///
/// PATCH /guilds/{guild_id}/roles/{role_id}
pub async fn update_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildRolePath>,
    RawBody(body): RawBody,
) -> ApiResult<ApiJson> {
    let role = state.store().write(|store| {
        let role = store
            .role(&path.guild_id, &path.role_id)?
            .overlay(&body)
            .map_err(ApiError::Decode)?;
        store.role_add(&path.guild_id, role.clone())?;
        Ok::<_, ApiError>(role)
    })?;

    info!(guild_id = %path.guild_id, role_id = %role.id, "Role updated");

    ApiJson::encode(&role)
}

/// Delete role
///
/// DELETE /guilds/{guild_id}/roles/{role_id}
pub async fn delete_role(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildRolePath>,
) -> ApiResult<Empty> {
    state
        .store()
        .write(|store| store.role_remove(&path.guild_id, &path.role_id))?;

    info!(guild_id = %path.guild_id, role_id = %path.role_id, "Role deleted");

    Ok(Empty)
}
