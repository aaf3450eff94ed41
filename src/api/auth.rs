use axum::{
    Json,
    extract::{FromRequestParts, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, request::Parts},
};
use std::sync::Arc;

use super::types::{LoginRequest, RegisterRequest};
use super::validation::{validate_login_request, validate_register};
use super::{ApiError, ApiResponse, AppState};
use crate::models::user::PublicUser;
use crate::services::auth_service::{AuthError, AuthPayload, RegisterInput};
use crate::services::tokens;

// ============================================================================
// Extractors
// ============================================================================

/// Caller identity proven by a bearer token. Rejects with 401 when the
/// token is missing, malformed, expired, or names a deleted user.
pub struct CurrentUser(pub PublicUser);

/// Optional caller identity. Never rejects: a missing or invalid token
/// yields `MaybeUser(None)` and the request proceeds as anonymous.
pub struct MaybeUser(pub Option<PublicUser>);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

        let claims = tokens::verify_token(token, &state.config.auth)
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

        let user = state
            .auth
            .get_user_by_id(claims.sub)
            .await
            .map_err(|e| {
                tracing::error!("User lookup during token verification failed: {}", e);
                ApiError::internal("Authentication failed")
            })?
            .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;

        Ok(Self(user))
    }
}

impl FromRequestParts<Arc<AppState>> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user = match extract_bearer(&parts.headers) {
            Some(token) => match tokens::verify_token(token, &state.config.auth) {
                Ok(claims) => state.auth.get_user_by_id(claims.sub).await.ok().flatten(),
                Err(_) => None,
            },
            None => None,
        };

        Ok(Self(user))
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AuthPayload>>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    validate_register(&payload)?;

    let result = state
        .auth
        .register(RegisterInput {
            login: payload.login,
            password: payload.password,
            confirm_password: payload.confirm_password,
            city: payload.city,
            street: payload.street,
            house_number: payload.house_number,
            payment_method: payload.payment_method,
        })
        .await
        .map_err(|e| match e {
            AuthError::PasswordMismatch => ApiError::validation(e.to_string()),
            AuthError::LoginTaken => ApiError::Conflict(e.to_string()),
            AuthError::InvalidCredentials => ApiError::unauthorized(e.to_string()),
            AuthError::Database(msg) | AuthError::Internal(msg) => {
                tracing::error!("Registration failed: {}", msg);
                ApiError::internal("Registration failed")
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            result,
            "User registered successfully",
        )),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AuthPayload>>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    validate_login_request(&payload)?;

    let result = state
        .auth
        .login(&payload.login, &payload.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => ApiError::unauthorized(e.to_string()),
            AuthError::PasswordMismatch | AuthError::LoginTaken => {
                ApiError::validation(e.to_string())
            }
            AuthError::Database(msg) | AuthError::Internal(msg) => {
                tracing::error!("Login failed: {}", msg);
                ApiError::internal("Login failed")
            }
        })?;

    Ok(Json(ApiResponse::success_with_message(
        result,
        "Login successful",
    )))
}

/// GET /auth/profile
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<ApiResponse<PublicUser>> {
    Json(ApiResponse::success(user))
}
