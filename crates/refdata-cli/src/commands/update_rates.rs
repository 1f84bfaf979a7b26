//! USD 환율 갱신 명령.

use anyhow::{Context, Result};
use refdata_db::RateReport;

/// 환율 갱신 명령 설정.
#[derive(Debug)]
pub struct UpdateRatesConfig {
    /// 데이터베이스 URL
    pub db_url: Option<String>,
}

/// CASH 증권 종가로부터 USD 환율을 갱신합니다.
pub async fn update_rates(config: UpdateRatesConfig) -> Result<RateReport> {
    let db = super::database_config(config.db_url)?;
    let pool = refdata_db::pool::connect(&db)
        .await
        .context("Failed to connect to database")?;

    let report = refdata_db::rates::refresh_usd_rates(&pool)
        .await
        .context("Failed to refresh rates")?;

    pool.close().await;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_url_flag_reaches_database_config() {
        let config = UpdateRatesConfig {
            db_url: Some("postgresql://ops:secret@db:5432/refdata".to_string()),
        };

        let db = super::super::database_config(config.db_url).unwrap();
        assert_eq!(db.url, "postgresql://ops:secret@db:5432/refdata");
    }
}
