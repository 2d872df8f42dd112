use chrono::{NaiveDate, Utc};
use salesboard::{test_utils::test_helpers, AppState};

#[tokio::test]
async fn test_seed_fills_empty_tables() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let state = AppState::from_pool(pool.clone());

    let day_before = Utc::now().format("%Y-%m-%d").to_string();
    let report = state.seed_service.seed_if_empty().await.unwrap();
    let day_after = Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(report.sales_inserted, 90);
    assert_eq!(report.visitors_inserted, 90);

    let chart = state.chart_service.sales_chart().await.unwrap();
    assert_eq!(chart.dates.len(), 30);
    let newest = chart.dates.last().cloned().unwrap();
    assert!(newest == day_before || newest == day_after, "{}", newest);
    for series in &chart.series {
        assert!(series
            .data
            .iter()
            .all(|amount| (1000.0..5000.0).contains(amount)));
    }

    let visitors = state.chart_service.visitor_chart().await.unwrap();
    for page in &visitors.data {
        assert!(page.value >= 30 * 100 && page.value < 30 * 1000);
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let state = AppState::from_pool(pool);

    state.seed_service.seed_if_empty().await.unwrap();
    let second = state.seed_service.seed_if_empty().await.unwrap();

    assert_eq!(second.sales_inserted, 0);
    assert_eq!(second.visitors_inserted, 0);
}

#[tokio::test]
async fn test_seed_skips_populated_table_only() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    test_helpers::insert_sales(&pool, &[(date, 10.0, "Food")])
        .await
        .unwrap();

    let state = AppState::from_pool(pool.clone());
    let report = state.seed_service.seed_if_empty().await.unwrap();

    assert_eq!(report.sales_inserted, 0);
    assert_eq!(report.visitors_inserted, 90);

    let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_data")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(sales, 1);
}
