pub mod auth_service;
pub mod chart_service;
pub mod password;
pub mod seed_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceError, LoginRequest};
pub use chart_service::{aggregate_sales, aggregate_visitors, ChartService};
pub use password::{Argon2Hasher, PasswordHasher};
pub use seed_service::{SeedReport, SeedService};
pub use user_service::{CreateUserRequest, UserService, UserServiceError};
