//! CLI 명령어 구현 모듈.

pub mod genpass;
pub mod load_securities;
pub mod shutdown;
pub mod update_rates;

use anyhow::{Context, Result};
use refdata_core::{AppConfig, DatabaseConfig};

/// 데이터베이스 설정을 결정합니다.
///
/// 우선순위: `--db-url` 플래그 → `DATABASE_URL` 환경 변수 → 설정 파일 →
/// 내장 기본값.
pub fn database_config(db_url: Option<String>) -> Result<DatabaseConfig> {
    let mut config = AppConfig::load_default()
        .context("Failed to load configuration")?
        .database;
    if let Some(url) = db_url.or_else(|| std::env::var("DATABASE_URL").ok()) {
        config.url = url;
    }
    Ok(config)
}
