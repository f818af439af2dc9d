// Admin token gate for private routes.
//
// Accepts the token in `x-auth-token` or as `Authorization: Bearer <token>`.
// Token issuance lives outside this service; only the configured value is accepted.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::modules::cylinder_tests::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

fn presented_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers.get(AUTH_TOKEN_HEADER) {
        return token.to_str().ok();
    }
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let verdict = match presented_token(request.headers()) {
        None => Err("No token, authorization denied"),
        Some(token) if token == &*state.auth_token => Ok(()),
        Some(_) => Err("Token is not valid"),
    };

    match verdict {
        Ok(()) => next.run(request).await,
        Err(msg) => {
            tracing::warn!(path = %request.uri().path(), msg, "request rejected by auth gate");
            error_response(StatusCode::UNAUTHORIZED, msg)
        }
    }
}
