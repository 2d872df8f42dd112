pub mod chart;
pub mod sales;
pub mod user;
pub mod visitor;

pub use chart::{ChartSeries, PageTotal, SalesChart, VisitorChart};
pub use sales::{NewSalesRecord, SalesRecord, SALES_CATEGORIES};
pub use user::{PublicUser, User};
pub use visitor::{NewVisitorRecord, VisitorRecord, VISITOR_PAGES};
