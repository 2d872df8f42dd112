pub mod sales_repository;
pub mod user_repository;
pub mod visitor_repository;

pub use sales_repository::{SalesRepository, SqliteSalesRepository};
pub use user_repository::{RepositoryError, RepositoryResult, SqliteUserRepository, UserRepository};
pub use visitor_repository::{SqliteVisitorRepository, VisitorRepository};
