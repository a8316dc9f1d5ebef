use actix_web::{App, HttpServer};
use anyhow::Context;
use storefront::config::{Config, DatabaseConfig};
use storefront::middleware::{create_cors, RateLimiter, RequestId};
use storefront::modules::auth::services::issuer_from_config;
use storefront::{telemetry, AppServices};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    telemetry::init(config.app.log_format);

    tracing::info!("Starting storefront backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Token mode: {:?}", config.auth.token_mode);

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({}-{} connections)",
        config.database.pool_size,
        config.database.max_connections
    );

    if config.database.run_migrations {
        DatabaseConfig::migrate(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let tokens = issuer_from_config(&config.auth)?;
    let services = AppServices::with_mysql(&db_pool, tokens);
    let http = config.http.clone();

    // One limiter for every worker
    let limiter = RateLimiter::new(http.rate_limit_per_minute);
    if limiter.is_enabled() {
        tracing::info!("Rate limit: {} requests/minute", http.rate_limit_per_minute);
    }

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(db_pool.clone()))
            .wrap(limiter.clone())
            .wrap(create_cors(&http))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
