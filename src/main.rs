use anyhow::Context;
use salesboard::{
    app::build_app,
    config::{
        session::SESSION_TABLE, validate_production_config, CorsConfig, ServerConfig,
        SessionConfig,
    },
    db, AppState,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "salesboard=debug,tower_http=debug,axum::rejection=trace".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    validate_production_config()?;
    let server_config = ServerConfig::from_env()?;

    // Database connection
    let pool = db::create_pool(&server_config.database_url)
        .await
        .with_context(|| format!("open database {}", server_config.database_url))?;
    db::run_migrations(&pool).await?;

    let app_state = AppState::from_pool(pool.clone());

    let report = app_state.seed_service.seed_if_empty().await?;
    tracing::info!(
        sales = report.sales_inserted,
        visitors = report.visitors_inserted,
        "seed data checked"
    );

    // Session store
    let session_store = SqliteStore::new(pool.clone())
        .with_table_name(SESSION_TABLE)
        .map_err(anyhow::Error::msg)?;
    session_store.migrate().await?;

    let session_layer = SessionConfig::from_env().create_layer(session_store);
    let cors_layer = CorsConfig::from_env().create_layer();

    let app = build_app(app_state, session_layer, cors_layer);

    let addr = server_config.addr();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
