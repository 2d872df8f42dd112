use serde::{Deserialize, Serialize};

/// Line chart payload: one x-axis of days, one series per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChart {
    pub dates: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<f64>,
}

/// Pie chart payload: all-time totals per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorChart {
    pub data: Vec<PageTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTotal {
    pub value: i64,
    pub name: String,
}
