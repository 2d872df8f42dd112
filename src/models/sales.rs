use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Categories every sales series is reported for, in display order.
pub const SALES_CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Food"];

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: i64,
    pub date: NaiveDateTime,
    pub amount: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSalesRecord {
    pub date: NaiveDateTime,
    pub amount: f64,
    pub category: String,
}
