//! Blanket session middleware.
//!
//! Every request outside the public-path allowlist must carry a valid
//! bearer token. Validation refreshes the session's idle clock and
//! attaches a [`RequestContext`] to the request for handlers and
//! extractors downstream.

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::Role;
use campus_service::RequestContext;

use crate::state::AppState;

/// Extract the bearer token from an Authorization header value.
pub(crate) fn bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Unauthorized"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::authentication("Unauthorized"))
}

/// Validate a token against the session table and derive the caller's
/// role.
pub(crate) fn authenticate(state: &AppState, token: &str) -> Result<RequestContext, AppError> {
    let principal = state.sessions.validate(token)?;
    let role = Role::for_principal(&principal, state.vault.superuser());
    Ok(RequestContext::new(principal, role))
}

/// The session gate applied to the whole router.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflights never carry credentials.
    if request.method() == Method::OPTIONS {
        return Ok(next.run(request).await);
    }

    if policy::is_public_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(request.headers())?;
    let ctx = authenticate(&state, token)?;
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
