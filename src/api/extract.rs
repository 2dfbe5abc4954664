//! Request body extraction
//!
//! Decodes JSON bodies without requiring a `Content-Type` header and turns
//! every decoding failure into a 400 `QuizError::InvalidBody`.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::QuizError;

/// JSON request body decoded into `T`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QuizError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| QuizError::InvalidBody(err.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| QuizError::InvalidBody(err.to_string()))
    }
}
