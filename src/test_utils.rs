pub mod test_helpers {
    use axum::Router;
    use chrono::NaiveDateTime;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use tower_sessions::cookie::SameSite;
    use tower_sessions_sqlx_store::SqliteStore;

    use crate::app::build_app;
    use crate::config::{session::SESSION_TABLE, CorsConfig, SessionConfig};
    use crate::services::password::{Argon2Hasher, PasswordHasher};
    use crate::AppState;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a test user with hashed password
    pub async fn insert_test_user(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, sqlx::Error> {
        let password_hash = Argon2Hasher
            .hash(password)
            .map_err(|e| sqlx::Error::Configuration(e.to_string().into()))?;

        let result =
            sqlx::query("INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?)")
                .bind(username)
                .bind(email)
                .bind(password_hash)
                .execute(pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn insert_sales(
        pool: &SqlitePool,
        rows: &[(NaiveDateTime, f64, &str)],
    ) -> Result<(), sqlx::Error> {
        for (date, amount, category) in rows {
            sqlx::query("INSERT INTO sales_data (date, amount, category) VALUES (?, ?, ?)")
                .bind(date)
                .bind(amount)
                .bind(category)
                .execute(pool)
                .await?;
        }
        Ok(())
    }

    pub async fn insert_visitors(
        pool: &SqlitePool,
        rows: &[(NaiveDateTime, i64, &str)],
    ) -> Result<(), sqlx::Error> {
        for (date, visitors, page) in rows {
            sqlx::query("INSERT INTO visitor_data (date, visitors, page) VALUES (?, ?, ?)")
                .bind(date)
                .bind(visitors)
                .bind(page)
                .execute(pool)
                .await?;
        }
        Ok(())
    }

    /// Full router over `pool` with the session table created. Cookies are
    /// issued without the `Secure` flag since tests talk plain HTTP.
    pub async fn create_test_app(pool: SqlitePool) -> Result<Router, sqlx::Error> {
        let store = SqliteStore::new(pool.clone())
            .with_table_name(SESSION_TABLE)
            .map_err(|e| sqlx::Error::Configuration(e.into()))?;
        store.migrate().await?;

        let session_config = SessionConfig {
            secure: false,
            same_site: SameSite::Lax,
            ..SessionConfig::default()
        };
        let session_layer = session_config.create_layer(store);
        let cors_layer = CorsConfig::default().create_layer();

        Ok(build_app(
            AppState::from_pool(pool),
            session_layer,
            cors_layer,
        ))
    }
}

// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
