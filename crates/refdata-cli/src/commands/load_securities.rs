//! 심볼 목록 파일 적재 명령.

use anyhow::{Context, Result};
use refdata_core::SecType;
use refdata_db::{LoadReport, LoadRequest, PgSecurityStore};
use tracing::info;

/// 적재 명령 설정.
#[derive(Debug)]
pub struct LoadSecuritiesConfig {
    /// 거래소 이름
    pub exchange: String,
    /// 증권 유형 태그 (호출자가 파싱을 마친 값)
    pub sec_type: SecType,
    /// 심볼 목록 파일 경로
    pub file: String,
    /// 데이터베이스 URL
    pub db_url: Option<String>,
}

/// 심볼 목록 파일을 데이터베이스에 적재합니다.
///
/// 유형 태그는 호출자가 파일을 열기 전에 검증해 넘깁니다. 저장소
/// 문장은 하나의 트랜잭션에 쌓여 파일 전체를 소비한 뒤 한 번에
/// 커밋됩니다.
pub async fn load_securities(config: LoadSecuritiesConfig) -> Result<LoadReport> {
    let sec_type = config.sec_type;

    let db = super::database_config(config.db_url)?;
    let pool = refdata_db::pool::connect(&db)
        .await
        .context("Failed to connect to database")?;

    let mut store = PgSecurityStore::begin(&pool)
        .await
        .context("Failed to open transaction")?;

    let request = LoadRequest {
        exchange: config.exchange.clone(),
        sec_type,
    };
    let report = refdata_db::loader::load_securities(&mut store, &request, &config.file)
        .await
        .with_context(|| format!("Failed to load {}", config.file))?;

    pool.close().await;

    info!(
        exchange = %config.exchange,
        sec_type = %sec_type,
        inserted = report.inserted,
        updated = report.updated,
        "load complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sec_type_rejected_before_file_or_db() {
        // 설정 구성 자체가 파싱을 요구하므로 잘못된 태그는 파일이나
        // DB에 닿기 전에 거부됨
        let err = "EQUITY".parse::<SecType>().unwrap_err();
        assert!(err.to_string().contains("invalid sec_type"));
    }
}
