//! 데이터베이스 연결 풀 생성.

use std::time::Duration;

use refdata_core::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::error::{Result, StoreError};

/// 새로운 데이터베이스 연결 풀을 생성합니다.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    info!("Database connection established");

    Ok(pool)
}
