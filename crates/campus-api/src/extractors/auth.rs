//! `CurrentUser` extractor — the authenticated request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use campus_core::error::AppError;
use campus_service::RequestContext;

use crate::middleware::auth::{authenticate, bearer_token};
use crate::state::AppState;

/// Extracted authenticated principal context available in handlers.
///
/// The session middleware normally attaches the context to the request.
/// For the few allowlisted paths that still want an identity
/// (`/auth/me`), the extractor falls back to validating the bearer
/// token itself.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(CurrentUser(ctx.clone()));
        }

        let token = bearer_token(&parts.headers)?;
        let ctx = authenticate(state, token)?;
        Ok(CurrentUser(ctx))
    }
}
