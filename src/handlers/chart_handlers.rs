use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::Result;
use crate::models::{SalesChart, VisitorChart};
use crate::AppState;

/// GET /api/sales-data - daily sales per category, shaped for a line chart
#[instrument(skip(state))]
pub async fn sales_data_handler(State(state): State<AppState>) -> Result<Json<SalesChart>> {
    let chart = state.chart_service.sales_chart().await?;
    Ok(Json(chart))
}

/// GET /api/visitor-data - all-time visitors per page, shaped for a pie chart
#[instrument(skip(state))]
pub async fn visitor_data_handler(State(state): State<AppState>) -> Result<Json<VisitorChart>> {
    let chart = state.chart_service.visitor_chart().await?;
    Ok(Json(chart))
}
