pub mod cors;
pub mod server;
pub mod session;

pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use session::{validate_production_config, SessionConfig, SessionLayer};
