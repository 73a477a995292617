//! Guild handlers
//!
//! Guilds are read-only through the API; they come from seed data.

use axum::extract::State;

use crate::extractors::{ApiPath, GuildIdPath};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List every known guild
///
/// GET /guilds
pub async fn get_guilds(State(state): State<AppState>) -> ApiResult<ApiJson> {
    state.store().read(|store| ApiJson::encode(store.guilds()))
}

/// Get guild by ID
///
/// GET /guilds/{guild_id}
pub async fn get_guild(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<GuildIdPath>,
) -> ApiResult<ApiJson> {
    state
        .store()
        .read(|store| ApiJson::encode(store.guild(&path.guild_id)?))
}
