use crate::models::user::User;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> RepositoryResult<User>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn list_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepositoryResult<Vec<User>>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> RepositoryResult<User> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?) RETURNING {}",
            USER_COLUMNS
        );
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&mut *tx)
            .await;

        // Dropping `tx` on the error paths rolls the insert back.
        match result {
            Ok(user) => {
                tx.commit().await?;
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::AlreadyExists),
            Err(e) => Err(RepositoryError::Database(e)),
        }
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepositoryResult<Vec<User>> {
        let limit = limit.unwrap_or(100);
        let offset = offset.unwrap_or(0);

        let sql = format!(
            "SELECT {} FROM users ORDER BY id ASC LIMIT ? OFFSET ?",
            USER_COLUMNS
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_pool;

    #[sqlx::test]
    async fn test_create_and_find_user() {
        let pool = create_test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let user = repo
            .create_user("alice", "alice@example.com", "$argon2id$fake")
            .await
            .unwrap();
        assert!(user.id > 0);
        assert!(!user.created_at.is_empty());

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        let by_email = repo.find_by_email("alice@example.com").await.unwrap();
        assert!(by_email.is_some());
        assert!(repo.find_by_id(user.id + 1).await.unwrap().is_none());
    }

    #[sqlx::test]
    async fn test_duplicate_username_is_already_exists() {
        let pool = create_test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create_user("bob", "bob@example.com", "h")
            .await
            .unwrap();
        let err = repo
            .create_user("bob", "other@example.com", "h")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists));

        let users = repo.list_users(None, None).await.unwrap();
        assert_eq!(users.len(), 1);
    }
}
