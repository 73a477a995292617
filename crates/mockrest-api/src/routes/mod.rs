//! Route definitions
//!
//! Guild resources are mounted under the configured API prefix; health sits
//! at the root.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{guilds, health, members, roles};
use crate::state::AppState;

/// Create the API router mounted under `prefix`
///
/// An empty prefix mounts the guild routes at the root.
pub fn create_router(prefix: &str) -> Router<AppState> {
    if prefix.is_empty() {
        Router::new().merge(guild_routes())
    } else {
        Router::new().nest(prefix, guild_routes())
    }
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Guild routes
fn guild_routes() -> Router<AppState> {
    Router::new()
        // Guilds
        .route("/guilds", get(guilds::get_guilds))
        .route("/guilds/:guild_id", get(guilds::get_guild))
        // Guild roles
        .route("/guilds/:guild_id/roles", get(roles::get_guild_roles))
        .route("/guilds/:guild_id/roles", post(roles::create_role))
        .route("/guilds/:guild_id/roles/:role_id", get(roles::get_role))
        .route("/guilds/:guild_id/roles/:role_id", patch(roles::update_role))
        .route("/guilds/:guild_id/roles/:role_id", delete(roles::delete_role))
        // Guild members
        .route("/guilds/:guild_id/members", get(members::get_guild_members))
        .route("/guilds/:guild_id/members", post(members::create_member))
        .route("/guilds/:guild_id/members/:user_id", get(members::get_guild_member))
        .route("/guilds/:guild_id/members/:user_id", patch(members::update_guild_member))
        .route("/guilds/:guild_id/members/:user_id", delete(members::remove_guild_member))
        // Member role assignment
        .route("/guilds/:guild_id/members/:user_id/roles", get(members::get_member_roles))
        .route(
            "/guilds/:guild_id/members/:user_id/roles/:role_id",
            get(members::get_member_role),
        )
        .route(
            "/guilds/:guild_id/members/:user_id/roles/:role_id",
            put(members::add_member_role),
        )
        .route(
            "/guilds/:guild_id/members/:user_id/roles/:role_id",
            delete(members::remove_member_role),
        )
}
