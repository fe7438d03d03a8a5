//! Identity extractors. They read the bearer JWT from the Authorization
//! header, validate it, and inject a `RequestContext`.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context. Rejects with 401 when no valid
/// token is present.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Identity that may be absent. A missing Authorization header yields
/// `None`; a present but invalid token is still rejected with 401.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl MaybeAuthUser {
    /// Returns the context, if a user is signed in.
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

/// Resolves the identity carried by the request headers.
fn resolve_identity(parts: &Parts, state: &AppState) -> AppResult<Option<RequestContext>> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode_access_token(token)?;
    debug!(user_id = %claims.user_id(), "Authenticated request");

    Ok(Some(RequestContext::new(claims.sub)))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_identity(parts, state)?
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Unauthorized").into())
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_identity(parts, state)?))
    }
}
