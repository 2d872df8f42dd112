use crate::models::{NewSalesRecord, NewVisitorRecord, SALES_CATEGORIES, VISITOR_PAGES};
use crate::repositories::{SalesRepository, VisitorRepository};
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;
use std::ops::Range;
use std::sync::Arc;

pub const SEED_DAYS: i64 = 30;
pub const SALES_AMOUNT_RANGE: Range<f64> = 1000.0..5000.0;
pub const VISITOR_COUNT_RANGE: Range<i64> = 100..1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub sales_inserted: u64,
    pub visitors_inserted: u64,
}

pub struct SeedService {
    sales_repository: Arc<dyn SalesRepository>,
    visitor_repository: Arc<dyn VisitorRepository>,
}

impl SeedService {
    pub fn new(
        sales_repository: Arc<dyn SalesRepository>,
        visitor_repository: Arc<dyn VisitorRepository>,
    ) -> Self {
        Self {
            sales_repository,
            visitor_repository,
        }
    }

    /// Fills each empty table with demo rows. Tables that already hold data
    /// are left untouched.
    pub async fn seed_if_empty(&self) -> Result<SeedReport> {
        let now = Utc::now().naive_utc();
        let mut report = SeedReport::default();

        let sales_count = self
            .sales_repository
            .count()
            .await
            .context("count sales rows")?;
        if sales_count == 0 {
            let rows = generate_sales(&mut rand::thread_rng(), now);
            report.sales_inserted = self
                .sales_repository
                .insert_many(rows)
                .await
                .context("insert sales seed rows")?;
        } else {
            tracing::debug!(rows = sales_count, "sales data present; skipping seed");
        }

        let visitor_count = self
            .visitor_repository
            .count()
            .await
            .context("count visitor rows")?;
        if visitor_count == 0 {
            let rows = generate_visitors(&mut rand::thread_rng(), now);
            report.visitors_inserted = self
                .visitor_repository
                .insert_many(rows)
                .await
                .context("insert visitor seed rows")?;
        } else {
            tracing::debug!(rows = visitor_count, "visitor data present; skipping seed");
        }

        Ok(report)
    }
}

/// One row per category for each of the last [`SEED_DAYS`] days, day 0 being `now`.
pub fn generate_sales<R: Rng>(rng: &mut R, now: NaiveDateTime) -> Vec<NewSalesRecord> {
    let mut rows = Vec::with_capacity(SEED_DAYS as usize * SALES_CATEGORIES.len());
    for day in 0..SEED_DAYS {
        let date = now - Duration::days(day);
        for category in SALES_CATEGORIES {
            rows.push(NewSalesRecord {
                date,
                amount: rng.gen_range(SALES_AMOUNT_RANGE),
                category: category.to_string(),
            });
        }
    }
    rows
}

/// One row per page for each of the last [`SEED_DAYS`] days, day 0 being `now`.
pub fn generate_visitors<R: Rng>(
    rng: &mut R,
    now: NaiveDateTime,
) -> Vec<NewVisitorRecord> {
    let mut rows = Vec::with_capacity(SEED_DAYS as usize * VISITOR_PAGES.len());
    for day in 0..SEED_DAYS {
        let date = now - Duration::days(day);
        for page in VISITOR_PAGES {
            rows.push(NewVisitorRecord {
                date,
                visitors: rng.gen_range(VISITOR_COUNT_RANGE),
                page: page.to_string(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::sales_repository::MockSalesRepository;
    use crate::repositories::visitor_repository::MockVisitorRepository;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_generate_sales_shape_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generate_sales(&mut rng, anchor());

        assert_eq!(rows.len(), 90);
        assert!(rows
            .iter()
            .all(|r| (1000.0..5000.0).contains(&r.amount)));

        let days: BTreeSet<_> = rows.iter().map(|r| r.date.date()).collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.iter().next_back().copied(), Some(anchor().date()));
        assert_eq!(
            days.iter().next().copied(),
            Some(anchor().date() - Duration::days(29))
        );

        for category in SALES_CATEGORIES {
            assert_eq!(rows.iter().filter(|r| r.category == category).count(), 30);
        }
    }

    #[test]
    fn test_generate_visitors_shape_and_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let rows = generate_visitors(&mut rng, anchor());

        assert_eq!(rows.len(), 90);
        assert!(rows.iter().all(|r| (100..1000).contains(&r.visitors)));
        for page in VISITOR_PAGES {
            assert_eq!(rows.iter().filter(|r| r.page == page).count(), 30);
        }
    }

    #[tokio::test]
    async fn test_seed_skips_populated_tables() {
        let mut sales = MockSalesRepository::new();
        sales
            .expect_count()
            .times(1)
            .returning(|| Box::pin(async move { Ok(5) }));
        sales.expect_insert_many().times(0);

        let mut visitors = MockVisitorRepository::new();
        visitors
            .expect_count()
            .times(1)
            .returning(|| Box::pin(async move { Ok(0) }));
        visitors
            .expect_insert_many()
            .times(1)
            .returning(|rows| {
                let n = rows.len() as u64;
                Box::pin(async move { Ok(n) })
            });

        let service = SeedService::new(Arc::new(sales), Arc::new(visitors));
        let report = service.seed_if_empty().await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                sales_inserted: 0,
                visitors_inserted: 90
            }
        );
    }
}
