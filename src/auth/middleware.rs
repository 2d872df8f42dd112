use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::auth::session::session_user_id;
use crate::error::AppError;

pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    match session_user_id(&session).await {
        Ok(Some(_user_id)) => next.run(request).await,
        Ok(None) => AppError::Unauthorized.into_response(),
        Err(e) => e.into_response(),
    }
}
