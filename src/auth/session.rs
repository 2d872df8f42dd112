use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;

pub const USER_ID_KEY: &str = "user_id";

/// Marks `session` as belonging to `user_id`. The session id is rotated first
/// so an id handed out before login cannot be reused afterwards.
pub async fn issue_session(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user_id).await?;
    Ok(())
}

pub async fn session_user_id(session: &Session) -> Result<Option<i64>, AppError> {
    Ok(session.get::<i64>(USER_ID_KEY).await?)
}

pub async fn end_session(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}

/// The signed-in user for the current request. Rejects with 401 when the
/// request carries no authenticated session.
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub session: Session,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;

        let user_id = session_user_id(&session)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(Self { user_id, session })
    }
}
