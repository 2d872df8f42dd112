use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::services::password::{Argon2Hasher, PasswordHasher, DUMMY_HASH};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] crate::repositories::user_repository::RepositoryError),
}

pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self::with_hasher(user_repository, Arc::new(Argon2Hasher))
    }

    pub fn with_hasher(
        user_repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            hasher,
        }
    }

    pub async fn authenticate(&self, request: LoginRequest) -> Result<User, AuthServiceError> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(AuthServiceError::MissingField("username"));
        }
        if request.password.is_empty() {
            return Err(AuthServiceError::MissingField("password"));
        }

        let Some(user) = self.user_repository.find_by_username(username).await? else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = self.hasher.verify(&request.password, dummy);
            }
            tracing::warn!(%username, "login failed");
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !self.hasher.verify(&request.password, &user.password_hash) {
            tracing::warn!(%username, "login failed");
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<User, AuthServiceError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}
