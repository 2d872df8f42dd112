use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{handlers as auth_handlers, middleware::require_auth};
use crate::config::SessionLayer;
use crate::handlers;
use crate::middleware::add_security_headers;
use crate::AppState;

pub fn build_app(state: AppState, session_layer: SessionLayer, cors_layer: CorsLayer) -> Router {
    let protected_routes = Router::new()
        .route("/api/sales-data", get(handlers::sales_data_handler))
        .route("/api/visitor-data", get(handlers::visitor_data_handler))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/api/hello", get(handlers::hello_handler))
        .route("/api/echo", post(handlers::echo_handler))
        .route("/api/echo2", post(handlers::echo2_handler))
        .route("/api/register", post(auth_handlers::register_handler))
        .route("/api/login", post(auth_handlers::login_handler))
        .route("/api/logout", post(auth_handlers::logout_handler))
        .route("/api/user", get(auth_handlers::current_user_handler))
        .merge(protected_routes)
        .layer(session_layer)
        .layer(middleware::from_fn(add_security_headers))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
