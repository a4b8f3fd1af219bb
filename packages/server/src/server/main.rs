// Main entry point for the GYWAN site server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{
    domains::auth::JwtService,
    kernel::{ServerDeps, SmtpMailer, StripeAdapter},
    server::{build_app, AppState},
    Config,
};
use sqlx::postgres::PgPoolOptions;
use stripe::{StripeOptions, StripeService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GYWAN site server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(debug = config.debug, "Configuration loaded");

    // Connect to database
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // External services
    let stripe = Arc::new(StripeService::new(StripeOptions {
        secret_key: config.stripe_secret_key.clone(),
        api_base: config.stripe_api_base.clone(),
    }));
    let mailer = SmtpMailer::new(&config.smtp).context("Failed to configure mailer")?;
    tracing::info!(smtp_enabled = mailer.is_enabled(), "Mailer ready");

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));
    if config.admin_email.is_none() || config.admin_password_sha256.is_none() {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD_SHA256 not set; admin login is disabled");
    }

    let deps = ServerDeps::new(
        pool,
        Arc::new(StripeAdapter::new(stripe)),
        Arc::new(mailer),
        jwt_service,
        Arc::new(config.site_settings()),
    );

    let app = build_app(AppState::new(deps, &config.media_root));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    if config.debug {
        tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    }
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
