//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container and one migration run are shared by every test in
//! a binary. Tests keep out of each other's way by tagging the rows they
//! create with a unique token and filtering on it.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use server_core::config::SiteSettings;
use server_core::domains::auth::{hash_password, JwtService};
use server_core::kernel::test_dependencies::{MockMailer, MockPaymentGateway};
use server_core::kernel::ServerDeps;
use server_core::server::{build_app, AppState};

use super::{GraphQLClient, HttpClient};

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "gywan-test";
pub const ADMIN_EMAIL: &str = "admin@gywan.org";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness: a fresh pool plus recording doubles for Stripe and SMTP.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let response = ctx.http().get("/events/").await;
///     // ...
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
    pub payments: MockPaymentGateway,
    pub mailer: MockMailer,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        Self::with_mocks(MockPaymentGateway::new(), MockMailer::new()).await
    }

    /// Harness whose payment gateway and mailer behave as given.
    pub async fn with_mocks(payments: MockPaymentGateway, mailer: MockMailer) -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let mut settings = SiteSettings::for_tests();
        settings.admin_email = Some(ADMIN_EMAIL.to_string());
        settings.admin_password_sha256 = Some(hash_password(ADMIN_PASSWORD));

        let deps = ServerDeps::new(
            db_pool.clone(),
            Arc::new(payments.clone()),
            Arc::new(mailer.clone()),
            Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
            Arc::new(settings),
        );

        Ok(Self {
            db_pool,
            payments,
            mailer,
            deps,
        })
    }

    /// HTTP client driving the full router in-process.
    pub fn http(&self) -> HttpClient {
        let media_root = std::env::temp_dir().join("gywan-test-media");
        HttpClient::new(build_app(AppState::new(self.deps.clone(), media_root)))
    }

    /// GraphQL client with no signed-in user.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps.clone(), None)
    }

    /// GraphQL client acting as the configured admin.
    pub fn graphql_as_admin(&self) -> GraphQLClient {
        GraphQLClient::as_user(self.deps.clone(), ADMIN_EMAIL, true)
    }

    /// A valid admin bearer token.
    pub fn admin_token(&self) -> String {
        self.deps
            .jwt_service
            .create_token(ADMIN_EMAIL, true)
            .expect("Failed to create admin token")
    }
}

/// Unique marker for rows created by one test.
pub fn unique_token() -> String {
    format!("t{}", uuid::Uuid::new_v4().simple())
}
