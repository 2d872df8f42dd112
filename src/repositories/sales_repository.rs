use crate::models::sales::{NewSalesRecord, SalesRecord};
use crate::repositories::user_repository::RepositoryResult;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait SalesRepository: Send + Sync {
    async fn list_all(&self) -> RepositoryResult<Vec<SalesRecord>>;
    async fn count(&self) -> RepositoryResult<i64>;
    async fn insert_many(&self, records: Vec<NewSalesRecord>) -> RepositoryResult<u64>;
}

pub struct SqliteSalesRepository {
    pool: SqlitePool,
}

impl SqliteSalesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesRepository for SqliteSalesRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<SalesRecord>> {
        let rows = sqlx::query_as::<_, SalesRecord>(
            "SELECT id, date, amount, category FROM sales_data ORDER BY date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales_data")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_many(&self, records: Vec<NewSalesRecord>) -> RepositoryResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for record in &records {
            let result =
                sqlx::query("INSERT INTO sales_data (date, amount, category) VALUES (?, ?, ?)")
                    .bind(record.date)
                    .bind(record.amount)
                    .bind(&record.category)
                    .execute(&mut *tx)
                    .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
