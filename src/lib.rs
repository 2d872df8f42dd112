pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

use repositories::{SqliteSalesRepository, SqliteUserRepository, SqliteVisitorRepository};
use services::{AuthService, ChartService, SeedService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub chart_service: Arc<ChartService>,
    pub seed_service: Arc<SeedService>,
}

impl AppState {
    /// Wires the SQLite repositories and services on top of `pool`.
    pub fn from_pool(pool: sqlx::SqlitePool) -> Self {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let sales_repository = Arc::new(SqliteSalesRepository::new(pool.clone()));
        let visitor_repository = Arc::new(SqliteVisitorRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            auth_service: Arc::new(AuthService::new(user_repository)),
            chart_service: Arc::new(ChartService::new(
                sales_repository.clone(),
                visitor_repository.clone(),
            )),
            seed_service: Arc::new(SeedService::new(sales_repository, visitor_repository)),
        }
    }
}
