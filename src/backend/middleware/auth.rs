/**
 * Authentication Middleware
 *
 * Protects the report routes. The middleware reads the `Authorization`
 * header, verifies the JWT with the secret shared with the auth service,
 * and attaches the caller's identity to the request. Handlers pick it up
 * through the `AuthUser` extractor.
 *
 * # Failures
 *
 * - No `Authorization` header: `403 Forbidden`
 * - Malformed header, bad signature or expired token: `401 Unauthorized`
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ReportError;
use crate::backend::server::state::AppState;
use crate::backend::upstream::BearerToken;

/// Caller identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: String,
    /// The verified credential, forwarded to upstream services
    pub token: BearerToken,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies it against the configured secret
/// 3. Attaches `AuthenticatedUser` to the request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ReportError> {
    let user = authenticate(request.headers().get(AUTHORIZATION), &app_state.config.jwt_secret)?;

    tracing::debug!(user_id = %user.id, role = %user.role, "Authenticated request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Verify an `Authorization` header value
///
/// # Returns
///
/// The caller identity, or the auth error to send back
pub fn authenticate(
    header: Option<&axum::http::HeaderValue>,
    secret: &str,
) -> Result<AuthenticatedUser, ReportError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        ReportError::missing_token()
    })?;

    let raw = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid ASCII");
        ReportError::invalid_token()
    })?;

    let token = BearerToken::parse(raw).map_err(|e| {
        tracing::warn!("Invalid Authorization header format: {}", e);
        ReportError::invalid_token()
    })?;

    let claims = verify_token(token.as_str(), secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ReportError::invalid_token()
    })?;

    Ok(AuthenticatedUser {
        id: claims.id,
        role: claims.role,
        token,
    })
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ReportError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ReportError::invalid_token()
            })?;

        Ok(AuthUser(user))
    }
}
