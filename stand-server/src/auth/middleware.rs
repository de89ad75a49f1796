//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Require a logged-in user.
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`
/// and injects [`CurrentUser`] into the request extensions.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/`
/// - `/api/health`
/// - `/api/auth/login`, `/api/auth/register`
/// - `/api/events` (WebSocket; browsers cannot attach headers)
/// - `/api/photos/{id}/file`, `/api/photos/{id}/thumbnail`
///   (referenced from `<img>` tags)
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "auth_missing");
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "auth_failed");
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

fn is_public_api_route(path: &str) -> bool {
    if matches!(
        path,
        "/api/health" | "/api/auth/login" | "/api/auth/register" | "/api/events"
    ) {
        return true;
    }

    // Photo binaries are fetched by <img> tags without headers
    path.starts_with("/api/photos/") && (path.ends_with("/file") || path.ends_with("/thumbnail"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(is_public_api_route("/api/health"));
        assert!(is_public_api_route("/api/auth/login"));
        assert!(is_public_api_route("/api/photos/abc/file"));
        assert!(is_public_api_route("/api/photos/abc/thumbnail"));
        assert!(!is_public_api_route("/api/photos/abc"));
        assert!(!is_public_api_route("/api/orders"));
        assert!(!is_public_api_route("/api/auth/me"));
    }
}
