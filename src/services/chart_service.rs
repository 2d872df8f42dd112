use crate::models::{
    ChartSeries, PageTotal, SalesChart, SalesRecord, VisitorChart, VisitorRecord,
    SALES_CATEGORIES, VISITOR_PAGES,
};
use crate::repositories::{RepositoryResult, SalesRepository, VisitorRepository};
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

const SERIES_KIND: &str = "line";

pub struct ChartService {
    sales_repository: Arc<dyn SalesRepository>,
    visitor_repository: Arc<dyn VisitorRepository>,
}

impl ChartService {
    pub fn new(
        sales_repository: Arc<dyn SalesRepository>,
        visitor_repository: Arc<dyn VisitorRepository>,
    ) -> Self {
        Self {
            sales_repository,
            visitor_repository,
        }
    }

    pub async fn sales_chart(&self) -> RepositoryResult<SalesChart> {
        let records = self.sales_repository.list_all().await?;
        Ok(aggregate_sales(&records))
    }

    pub async fn visitor_chart(&self) -> RepositoryResult<VisitorChart> {
        let records = self.visitor_repository.list_all().await?;
        Ok(aggregate_visitors(&records))
    }
}

pub fn day_key(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Groups sales by calendar day and category.
///
/// `dates` holds every day that has at least one row, ascending. Each series
/// is aligned to it, with 0.0 for days the category has no sales. Rows whose
/// category is outside [`SALES_CATEGORIES`] still contribute their day.
pub fn aggregate_sales(records: &[SalesRecord]) -> SalesChart {
    let dates: Vec<String> = records
        .iter()
        .map(|r| day_key(&r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let positions: HashMap<&str, usize> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| (d.as_str(), i))
        .collect();

    let mut totals: HashMap<&str, Vec<f64>> = SALES_CATEGORIES
        .iter()
        .map(|c| (*c, vec![0.0; dates.len()]))
        .collect();

    for record in records {
        let Some(series) = totals.get_mut(record.category.as_str()) else {
            continue;
        };
        if let Some(&i) = positions.get(day_key(&record.date).as_str()) {
            series[i] += record.amount;
        }
    }

    let series = SALES_CATEGORIES
        .iter()
        .map(|category| ChartSeries {
            name: category.to_string(),
            kind: SERIES_KIND.to_string(),
            data: totals.remove(category).unwrap_or_default(),
        })
        .collect();

    SalesChart { dates, series }
}

/// All-time visitor totals for each page in [`VISITOR_PAGES`].
pub fn aggregate_visitors(records: &[VisitorRecord]) -> VisitorChart {
    let data = VISITOR_PAGES
        .iter()
        .map(|page| PageTotal {
            value: records
                .iter()
                .filter(|r| r.page == *page)
                .map(|r| r.visitors)
                .sum(),
            name: page.to_string(),
        })
        .collect();

    VisitorChart { data }
}
