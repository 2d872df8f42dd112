use crate::models::visitor::{NewVisitorRecord, VisitorRecord};
use crate::repositories::user_repository::RepositoryResult;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait VisitorRepository: Send + Sync {
    async fn list_all(&self) -> RepositoryResult<Vec<VisitorRecord>>;
    async fn count(&self) -> RepositoryResult<i64>;
    async fn insert_many(&self, records: Vec<NewVisitorRecord>) -> RepositoryResult<u64>;
}

pub struct SqliteVisitorRepository {
    pool: SqlitePool,
}

impl SqliteVisitorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorRepository for SqliteVisitorRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<VisitorRecord>> {
        let rows = sqlx::query_as::<_, VisitorRecord>(
            "SELECT id, date, visitors, page FROM visitor_data ORDER BY date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visitor_data")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_many(&self, records: Vec<NewVisitorRecord>) -> RepositoryResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for record in &records {
            let result =
                sqlx::query("INSERT INTO visitor_data (date, visitors, page) VALUES (?, ?, ?)")
                    .bind(record.date)
                    .bind(record.visitors)
                    .bind(&record.page)
                    .execute(&mut *tx)
                    .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_pool;
    use chrono::NaiveDate;

    #[sqlx::test]
    async fn test_insert_many_is_counted() {
        let pool = create_test_pool().await;
        let repo = SqliteVisitorRepository::new(pool);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let rows = ["Home", "Products", "About"]
            .iter()
            .map(|page| NewVisitorRecord {
                date,
                visitors: 150,
                page: page.to_string(),
            })
            .collect();

        assert_eq!(repo.insert_many(rows).await.unwrap(), 3);
        assert_eq!(repo.count().await.unwrap(), 3);

        let listed = repo.list_all().await.unwrap();
        assert!(listed.iter().all(|r| r.visitors == 150 && r.date == date));
    }

    #[sqlx::test]
    async fn test_empty_insert_is_a_noop() {
        let pool = create_test_pool().await;
        let repo = SqliteVisitorRepository::new(pool);

        assert_eq!(repo.insert_many(Vec::new()).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
