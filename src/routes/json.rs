//! JSON body extractor with API-shaped rejections
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but malformed bodies, missing
//! fields and a wrong content type are reported as `400 {"error": ...}`
//! through [`AppError`] instead of axum's plain-text rejection.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
