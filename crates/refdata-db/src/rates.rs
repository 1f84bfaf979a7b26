//! USD 환율 갱신.
//!
//! CASH 유형 증권의 종가를 읽어 USD 기준 통화쌍(USDxxx)의 역수를
//! 해당 통화를 쓰는 모든 증권의 rate 컬럼에 기록합니다.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::error::Result;

/// 환율 갱신 결과.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RateReport {
    /// 처리된 USD 통화쌍 수
    pub pairs: usize,
    /// 갱신된 증권 행 수
    pub updated_rows: u64,
}

/// USD 통화쌍 심볼에서 상대 통화를 추출합니다.
///
/// "USDKRW" → Some("KRW"), "EURUSD"나 "USD" 단독은 None.
pub fn usd_counter_currency(symbol: &str) -> Option<&str> {
    symbol.strip_prefix("USD").filter(|ccy| !ccy.is_empty())
}

/// CASH 증권 종가로부터 USD 환율을 갱신합니다.
///
/// 종가가 없거나 0 이하인 통화쌍은 건너뜁니다. 모든 갱신은 하나의
/// 트랜잭션으로 커밋됩니다.
pub async fn refresh_usd_rates(pool: &PgPool) -> Result<RateReport> {
    let cash_rows: Vec<(String, Option<f64>)> =
        sqlx::query_as("SELECT symbol, close_price FROM security WHERE \"type\" = 'CASH'")
            .fetch_all(pool)
            .await?;

    let mut tx = pool.begin().await?;
    let mut report = RateReport::default();

    for (symbol, close_price) in cash_rows {
        let Some(currency) = usd_counter_currency(&symbol) else {
            continue;
        };
        let Some(close) = close_price.filter(|c| *c > 0.0) else {
            warn!(symbol = %symbol, "skipping pair without positive close price");
            continue;
        };
        let rate = 1.0 / close;

        let result = sqlx::query("UPDATE security SET rate = $1 WHERE currency = $2")
            .bind(rate)
            .bind(currency)
            .execute(&mut *tx)
            .await?;

        report.pairs += 1;
        report.updated_rows += result.rows_affected();
    }

    tx.commit().await?;
    info!(
        pairs = report.pairs,
        updated_rows = report.updated_rows,
        "USD rates refreshed"
    );

    Ok(report)
}
