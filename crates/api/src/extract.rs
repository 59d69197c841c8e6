//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that never rejects on content.
///
/// An empty body, a body that is not valid JSON, or JSON that does not fit
/// `T` all yield `T::default()`, so handlers report missing fields through
/// their normal validation. No `Content-Type` header is required. Only a
/// failure to read the body at all is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {e}")))?;

        Ok(Self(parse_lenient(&bytes)))
    }
}

/// Deserialize `bytes` as JSON, falling back to `T::default()`.
fn parse_lenient<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.is_empty() {
        return T::default();
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "Unparseable JSON body, treating as empty object");
            T::default()
        }
    }
}
