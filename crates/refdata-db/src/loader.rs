//! 증권 적재기.
//!
//! 심볼 목록 파일을 한 행씩 읽어 매핑/변환하고, 배치 시작 시점에
//! 적재한 고유 코드 스냅샷으로 insert/update를 결정합니다. 모든 행이
//! 소비된 뒤 트랜잭션이 한 번 커밋됩니다. 어떤 실패든 현재 호출 전체를
//! 중단시키며 부분 커밋은 없습니다.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use refdata_core::{map_line, SecType};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::store::SecurityStore;

/// 한 배치의 적재 요청.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// 거래소 이름 (exchange 테이블에서 식별자로 변환됨)
    pub exchange: String,
    /// 신규 증권에 부여할 유형 태그
    pub sec_type: SecType,
}

/// 배치 처리 결과.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// 삽입된 행 수
    pub inserted: usize,
    /// 갱신된 행 수
    pub updated: usize,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

/// 심볼 목록 파일을 적재합니다.
pub async fn load_securities<S: SecurityStore>(
    store: &mut S,
    request: &LoadRequest,
    path: impl AsRef<Path>,
) -> Result<LoadReport> {
    let file = File::open(path.as_ref())?;
    load_from_reader(store, request, BufReader::new(file)).await
}

/// 리더에서 심볼 목록을 적재합니다.
///
/// 첫 행은 헤더로 버려집니다. 고유 코드 스냅샷은 배치 시작 시 한 번만
/// 적재되며 중간에 갱신되지 않습니다. 따라서 한 파일 안에서 같은 신규
/// 고유 코드가 반복되면 각 행이 모두 삽입 경로를 타게 됩니다.
pub async fn load_from_reader<S: SecurityStore, R: BufRead>(
    store: &mut S,
    request: &LoadRequest,
    reader: R,
) -> Result<LoadReport> {
    let exchanges = store.exchange_ids().await?;
    let exchange_id = *exchanges
        .get(&request.exchange)
        .ok_or_else(|| StoreError::UnknownExchange(request.exchange.clone()))?;
    debug!(exchange = %request.exchange, exchange_id, "resolved exchange");

    let existing = store.bbgid_snapshot().await?;
    info!(
        existing = existing.len(),
        "loaded existing bbgid snapshot"
    );

    let mut report = LoadReport::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            // 헤더 행
            continue;
        }
        let line_no = index + 1;
        let row = map_line(&line, line_no)?;
        match row.bbgid.as_deref() {
            Some(bbgid) if existing.contains(bbgid) => {
                store.update_security(&row, bbgid).await?;
                report.updated += 1;
            }
            _ => {
                store.insert_security(&row, request.sec_type, exchange_id).await?;
                report.inserted += 1;
            }
        }
    }

    store.commit().await?;
    info!(
        inserted = report.inserted,
        updated = report.updated,
        "security load committed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use refdata_core::{FieldValue, RefdataError, SecurityField, SecurityRow};
    use std::collections::{HashMap, HashSet};
    use std::io::Cursor;

    /// 발행된 문장 기록.
    #[derive(Debug, Clone)]
    enum Issued {
        Insert {
            columns: Vec<&'static str>,
            bbgid: Option<String>,
            sec_type: SecType,
            exchange_id: i32,
        },
        Update {
            columns: Vec<&'static str>,
            bbgid: String,
            close_price: Option<f64>,
        },
    }

    #[derive(Default)]
    struct MockStore {
        exchanges: HashMap<String, i32>,
        existing: HashSet<String>,
        issued: Vec<Issued>,
        committed: bool,
    }

    impl MockStore {
        fn new(exchanges: &[(&str, i32)], existing: &[&str]) -> Self {
            Self {
                exchanges: exchanges
                    .iter()
                    .map(|(n, id)| (n.to_string(), *id))
                    .collect(),
                existing: existing.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl SecurityStore for MockStore {
        async fn exchange_ids(&mut self) -> Result<HashMap<String, i32>> {
            Ok(self.exchanges.clone())
        }

        async fn bbgid_snapshot(&mut self) -> Result<HashSet<String>> {
            Ok(self.existing.clone())
        }

        async fn insert_security(
            &mut self,
            row: &SecurityRow,
            sec_type: SecType,
            exchange_id: i32,
        ) -> Result<()> {
            self.issued.push(Issued::Insert {
                columns: row.columns(),
                bbgid: row.bbgid.clone(),
                sec_type,
                exchange_id,
            });
            Ok(())
        }

        async fn update_security(&mut self, row: &SecurityRow, bbgid: &str) -> Result<()> {
            let close_price = row
                .values
                .iter()
                .find(|(f, _)| *f == SecurityField::ClosePrice)
                .and_then(|(_, v)| v.as_float());
            self.issued.push(Issued::Update {
                columns: row.columns(),
                bbgid: bbgid.to_string(),
                close_price,
            });
            Ok(())
        }

        async fn commit(&mut self) -> Result<()> {
            self.committed = true;
            Ok(())
        }
    }

    const HEADER: &str = "symbol,local_symbol,type,currency,bbgid,sedol,isin,cusip,close_price,adv20,market_cap,sector,industry_group,industry,sub_industry,region,lot_size,multiplier,flag\n";
    const AAPL: &str = "AAPL US,AAPL,STK,USD,BBG000B9XRY4,,,,150.00,,,,,,,,,,\n";

    fn request() -> LoadRequest {
        LoadRequest {
            exchange: "NASDAQ".to_string(),
            sec_type: SecType::Stk,
        }
    }

    #[tokio::test]
    async fn test_new_bbgid_is_inserted_with_type_and_exchange() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &[]);
        let input = Cursor::new(format!("{HEADER}{AAPL}"));

        let report = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        assert_eq!(report, LoadReport { inserted: 1, updated: 0 });
        assert!(store.committed);
        match &store.issued[0] {
            Issued::Insert {
                columns,
                bbgid,
                sec_type,
                exchange_id,
            } => {
                assert_eq!(columns.len(), 16);
                assert_eq!(bbgid.as_deref(), Some("BBG000B9XRY4"));
                assert_eq!(*sec_type, SecType::Stk);
                assert_eq!(*exchange_id, 4);
            }
            other => panic!("expected insert, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_known_bbgid_is_updated_without_type_or_exchange() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &["BBG000B9XRY4"]);
        let input = Cursor::new(format!("{HEADER}{AAPL}"));

        let report = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        assert_eq!(report, LoadReport { inserted: 0, updated: 1 });
        match &store.issued[0] {
            Issued::Update {
                columns,
                bbgid,
                close_price,
            } => {
                // 매핑된 필드만 갱신 대상이며 유형/거래소 컬럼은 없음
                assert_eq!(columns.len(), 16);
                assert!(!columns.contains(&"type"));
                assert!(!columns.contains(&"exchange_id"));
                assert_eq!(bbgid, "BBG000B9XRY4");
                assert_eq!(*close_price, Some(150.0));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_exchange_aborts_before_any_row() {
        let mut store = MockStore::new(&[("NYSE", 1)], &[]);
        let input = Cursor::new(format!("{HEADER}{AAPL}"));

        let err = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::UnknownExchange(name) if name == "NASDAQ"));
        assert!(store.issued.is_empty());
        assert!(!store.committed);
    }

    #[tokio::test]
    async fn test_malformed_line_aborts_batch_without_commit() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &[]);
        let input = Cursor::new(format!("{HEADER}{AAPL}MSFT,MSFT,STK\n"));

        let err = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap_err();

        match err {
            StoreError::Row(RefdataError::Format { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
        // 앞선 행의 문장은 발행되었지만 커밋은 되지 않음
        assert_eq!(store.issued.len(), 1);
        assert!(!store.committed);
    }

    #[tokio::test]
    async fn test_non_numeric_price_aborts_before_statement() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &[]);
        let bad = "AAPL US,AAPL,STK,USD,BBG000B9XRY4,,,,abc,,,,,,,,,,\n";
        let input = Cursor::new(format!("{HEADER}{bad}"));

        let err = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("close_price"));
        assert!(store.issued.is_empty());
        assert!(!store.committed);
    }

    #[tokio::test]
    async fn test_header_only_file_commits_empty_batch() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &[]);
        let input = Cursor::new(HEADER.to_string());

        let report = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        assert_eq!(report.total(), 0);
        assert!(store.issued.is_empty());
        assert!(store.committed);
    }

    #[tokio::test]
    async fn test_repeated_new_bbgid_inserts_twice() {
        // 스냅샷은 배치 중간에 갱신되지 않으므로 같은 신규 코드를 가진
        // 두 행은 모두 삽입 경로를 탄다 (문서화된 동작)
        let mut store = MockStore::new(&[("NASDAQ", 4)], &[]);
        let input = Cursor::new(format!("{HEADER}{AAPL}{AAPL}"));

        let report = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        assert_eq!(report, LoadReport { inserted: 2, updated: 0 });
    }

    #[tokio::test]
    async fn test_missing_bbgid_takes_insert_path() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &["BBG000B9XRY4"]);
        let no_bbgid = "AAPL US,AAPL,STK,USD,,,,,150.00,,,,,,,,,,\n";
        let input = Cursor::new(format!("{HEADER}{no_bbgid}"));

        let report = load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        assert_eq!(report, LoadReport { inserted: 1, updated: 0 });
        match &store.issued[0] {
            Issued::Insert { bbgid, .. } => assert_eq!(*bbgid, None),
            other => panic!("expected insert, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_fields_bind_as_null_not_zero() {
        let mut store = MockStore::new(&[("NASDAQ", 4)], &["BBG000B9XRY4"]);
        let sparse = "AAPL US,AAPL,STK,USD,BBG000B9XRY4,,,,,,,,,,,,,,\n";
        let input = Cursor::new(format!("{HEADER}{sparse}"));

        load_from_reader(&mut store, &request(), input)
            .await
            .unwrap();

        match &store.issued[0] {
            Issued::Update { close_price, .. } => assert_eq!(*close_price, None),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_field_value_never_coerces_to_zero() {
        assert_ne!(FieldValue::Null, FieldValue::Float(0.0));
        assert_ne!(FieldValue::Null, FieldValue::Text(String::new()));
    }
}
