//! Path parameter extractors
//!
//! Ids are opaque strings, so extraction only fails when the router hands
//! over parameters that do not fit the expected shape.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Path extractor that rejects with [`ApiError`] instead of axum's default
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// `/guilds/{guild_id}`
#[derive(Debug, Deserialize)]
pub struct GuildIdPath {
    pub guild_id: String,
}

/// `/guilds/{guild_id}/roles/{role_id}`
#[derive(Debug, Deserialize)]
pub struct GuildRolePath {
    pub guild_id: String,
    pub role_id: String,
}

/// `/guilds/{guild_id}/members/{user_id}`
#[derive(Debug, Deserialize)]
pub struct GuildUserPath {
    pub guild_id: String,
    pub user_id: String,
}

/// `/guilds/{guild_id}/members/{user_id}/roles/{role_id}`
#[derive(Debug, Deserialize)]
pub struct MemberRolePath {
    pub guild_id: String,
    pub user_id: String,
    pub role_id: String,
}
