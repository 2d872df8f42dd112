use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;
use crate::services::{auth_service::AuthServiceError, user_service::UserServiceError};

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => AppError::Database(e),
            RepositoryError::AlreadyExists => AppError::Conflict("Record already exists".into()),
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::MissingField(_)
            | UserServiceError::InvalidEmail
            | UserServiceError::UsernameTooLong => AppError::Validation(err.to_string()),
            UserServiceError::UsernameTaken
            | UserServiceError::EmailTaken
            | UserServiceError::AlreadyRegistered => AppError::Conflict(err.to_string()),
            UserServiceError::HashingError(msg) => AppError::Internal(msg),
            UserServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::MissingField(_) => AppError::Validation(err.to_string()),
            AuthServiceError::InvalidCredentials => AppError::InvalidCredentials,
            AuthServiceError::UserNotFound => AppError::Unauthorized,
            AuthServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Internal(format!("session error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = json!({ "error": self.public_message() });
        (status, Json(body)).into_response()
    }
}
