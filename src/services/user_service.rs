use crate::models::user::User;
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use crate::services::password::{Argon2Hasher, PasswordHasher};
use std::sync::Arc;

const MAX_USERNAME_LEN: usize = 80;
const MAX_EMAIL_LEN: usize = 255;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Username must be at most 80 characters")]
    UsernameTooLong,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Username or email already exists")]
    AlreadyRegistered,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_hasher(repository, Arc::new(Argon2Hasher))
    }

    pub fn with_hasher(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { repository, hasher }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        let username = request.username.trim();
        let email = request.email.trim();

        if username.is_empty() {
            return Err(UserServiceError::MissingField("username"));
        }
        if email.is_empty() {
            return Err(UserServiceError::MissingField("email"));
        }
        if request.password.trim().is_empty() {
            return Err(UserServiceError::MissingField("password"));
        }

        self.validate_username(username)?;
        self.validate_email(email)?;

        if self.repository.find_by_username(username).await?.is_some() {
            return Err(UserServiceError::UsernameTaken);
        }
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(UserServiceError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(|e| UserServiceError::HashingError(e.to_string()))?;

        // A concurrent registration can still win the race between the
        // lookups above and this insert; the unique constraints catch it.
        match self
            .repository
            .create_user(username, email, &password_hash)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "user registered");
                Ok(user)
            }
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::AlreadyRegistered),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }

    pub async fn list_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<User>, UserServiceError> {
        Ok(self.repository.list_users(limit, offset).await?)
    }

    fn validate_username(&self, username: &str) -> Result<(), UserServiceError> {
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(UserServiceError::UsernameTooLong);
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), UserServiceError> {
        if !email.contains('@') || email.len() > MAX_EMAIL_LEN {
            return Err(UserServiceError::InvalidEmail);
        }
        Ok(())
    }
}
