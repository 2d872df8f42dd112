use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::auth::session::{end_session, issue_session, AuthenticatedUser};
use crate::error::{AppError, Result};
use crate::models::PublicUser;
use crate::services::{
    auth_service::{AuthServiceError, LoginRequest},
    user_service::CreateUserRequest,
};
use crate::AppState;

/// Absent and `null` fields both arrive as `None` and are reported as missing.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: PublicUser,
}

/// POST /api/register
#[instrument(skip_all)]
pub async fn register_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    let request = CreateUserRequest {
        username: payload.username.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    state.user_service.create_user(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

/// POST /api/login
#[instrument(skip_all)]
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let request = LoginRequest {
        username: payload.username.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    let user = state.auth_service.authenticate(request).await?;
    issue_session(&session, user.id).await?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: PublicUser::from(user),
    }))
}

/// POST /api/logout
#[instrument(skip(auth), fields(user_id = auth.user_id))]
pub async fn logout_handler(auth: AuthenticatedUser) -> Result<Json<MessageResponse>> {
    end_session(&auth.session).await?;

    info!("user logged out");
    Ok(Json(MessageResponse {
        message: "Logout successful".to_string(),
    }))
}

/// GET /api/user
#[instrument(skip(state, auth), fields(user_id = auth.user_id))]
pub async fn current_user_handler(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<CurrentUserResponse>> {
    match state.auth_service.get_user_by_id(auth.user_id).await {
        Ok(user) => Ok(Json(CurrentUserResponse {
            user: PublicUser::from(user),
        })),
        Err(AuthServiceError::UserNotFound) => {
            // The account behind this session no longer exists.
            end_session(&auth.session).await?;
            Err(AppError::Unauthorized)
        }
        Err(e) => Err(e.into()),
    }
}
