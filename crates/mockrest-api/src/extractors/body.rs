//! Raw request body extractor

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::response::ApiError;

/// Request body buffered as bytes
///
/// Transport-level read failures surface as `ApiError::Io`; decoding is left
/// to the handler.
#[derive(Debug, Clone)]
pub struct RawBody(pub Bytes);

#[async_trait]
impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Io(e.body_text()))?;

        Ok(RawBody(bytes))
    }
}
