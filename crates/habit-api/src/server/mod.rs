//! Server setup: dependency wiring and the HTTP listener

use std::sync::Arc;

use axum::Router;
use habit_common::{AppConfig, AppError, JwtService};
use habit_core::SnowflakeGenerator;
use habit_db::{create_pool, run_migrations, DatabaseConfig};
use habit_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application: rate-limited API routes plus unthrottled probes
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Connect to PostgreSQL, apply migrations, and assemble the services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;
    info!("Database migrations applied");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContext::postgres(pool, jwt_service, snowflake_generator);

    Ok(AppState::new(service_context, config))
}

pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;
    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
