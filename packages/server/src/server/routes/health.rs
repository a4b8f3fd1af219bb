use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::server::app::AppState;

const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: DatabaseHealth,
    connection_pool: PoolStats,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct PoolStats {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

async fn ping_database(pool: &PgPool) -> DatabaseHealth {
    let error = match tokio::time::timeout(DB_PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(format!("Query failed: {}", e)),
        Err(_) => Some(format!("Query timeout (>{}s)", DB_PING_TIMEOUT.as_secs())),
    };

    DatabaseHealth {
        ok: error.is_none(),
        error,
    }
}

/// Health check endpoint
///
/// 200 when the database answers within 5 seconds, 503 otherwise. Pool
/// stats are reported either way.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let pool = &state.deps.db_pool;
    let database = ping_database(pool).await;

    let connection_pool = PoolStats {
        size: pool.size(),
        idle_connections: pool.num_idle(),
        max_connections: pool.options().get_max_connections(),
    };

    let (status_code, status) = if database.ok {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!(error = ?database.error, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            database,
            connection_pool,
        }),
    )
}
