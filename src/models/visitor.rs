use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pages visitor totals are reported for, in display order.
pub const VISITOR_PAGES: [&str; 3] = ["Home", "Products", "About"];

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: i64,
    pub date: NaiveDateTime,
    pub visitors: i64,
    pub page: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVisitorRecord {
    pub date: NaiveDateTime,
    pub visitors: i64,
    pub page: String,
}
