//! JSON body extractor that reports failures in the standard error body.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use drive_core::AppError;

use crate::dto::request::validate_body;
use crate::error::ApiError;

/// A JSON body that has been deserialized and passed its `validator` rules.
///
/// Malformed JSON, a wrong content type, and missing or mistyped fields are all
/// rejected with 400 `VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        validate_body(&body)?;
        Ok(ValidatedJson(body))
    }
}
