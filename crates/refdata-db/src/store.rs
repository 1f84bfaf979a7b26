//! 증권 저장소.
//!
//! 적재기는 `SecurityStore` 트레이트를 통해서만 저장소에 접근합니다.
//! 모든 문장은 하나의 열린 트랜잭션에 쌓이고, 파일 전체를 소비한 뒤
//! `commit` 한 번으로 반영됩니다.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use refdata_core::{FieldKind, FieldValue, SecType, SecurityField, SecurityRow};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use crate::error::{Result, StoreError};

/// 적재기가 소비하는 저장소 인터페이스.
///
/// (a) 매개변수화된 조회, (b) 반환값 없는 문장 실행, (c) 단일 커밋.
#[async_trait]
pub trait SecurityStore {
    /// 거래소 이름 → 숫자 식별자 맵을 조회합니다.
    async fn exchange_ids(&mut self) -> Result<HashMap<String, i32>>;

    /// 이미 존재하는 고유 코드(bbgid) 집합을 조회합니다.
    async fn bbgid_snapshot(&mut self) -> Result<HashSet<String>>;

    /// 매핑된 모든 필드에 유형 태그와 거래소 식별자를 더해 삽입합니다.
    async fn insert_security(
        &mut self,
        row: &SecurityRow,
        sec_type: SecType,
        exchange_id: i32,
    ) -> Result<()>;

    /// 고유 코드를 키로 매핑된 필드만 갱신합니다. 유형과 거래소는 건드리지 않습니다.
    async fn update_security(&mut self, row: &SecurityRow, bbgid: &str) -> Result<()>;

    /// 쌓인 문장 전체를 한 단위로 커밋합니다.
    async fn commit(&mut self) -> Result<()>;
}

/// INSERT 문을 생성합니다. 매핑된 컬럼 뒤에 "type"과 exchange_id가 붙습니다.
fn insert_sql(columns: &[&str]) -> String {
    let mut cols = columns.to_vec();
    cols.push("\"type\"");
    cols.push("exchange_id");
    let params: Vec<String> = (1..=cols.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO security ({}) VALUES ({})",
        cols.join(", "),
        params.join(", ")
    )
}

/// UPDATE 문을 생성합니다. 매핑된 컬럼만 SET 목록에 들어갑니다.
fn update_sql(columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect();
    format!(
        "UPDATE security SET {} WHERE bbgid = ${}",
        sets.join(", "),
        columns.len() + 1
    )
}

/// 필드 범주에 맞는 타입으로 값을 바인딩합니다. null은 해당 타입의 None으로 바인딩됩니다.
fn bind_field<'q>(
    query: Query<'q, Postgres, PgArguments>,
    field: SecurityField,
    value: &'q FieldValue,
) -> Query<'q, Postgres, PgArguments> {
    match field.kind() {
        FieldKind::Text => query.bind(value.as_text()),
        FieldKind::Float => query.bind(value.as_float()),
        FieldKind::Int => query.bind(value.as_int()),
    }
}

/// 단일 트랜잭션을 쥐고 있는 Postgres 저장소.
pub struct PgSecurityStore {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgSecurityStore {
    /// 풀에서 트랜잭션을 열어 저장소를 생성합니다.
    pub async fn begin(pool: &PgPool) -> Result<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx: Some(tx) })
    }

    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>> {
        self.tx.as_mut().ok_or(StoreError::TransactionClosed)
    }
}

#[async_trait]
impl SecurityStore for PgSecurityStore {
    async fn exchange_ids(&mut self) -> Result<HashMap<String, i32>> {
        let tx = self.tx()?;
        let rows: Vec<(String, i32)> =
            sqlx::query_as("SELECT name, id FROM exchange")
                .fetch_all(&mut **tx)
                .await?;
        Ok(rows.into_iter().collect())
    }

    async fn bbgid_snapshot(&mut self) -> Result<HashSet<String>> {
        let tx = self.tx()?;
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT bbgid FROM security WHERE bbgid IS NOT NULL")
                .fetch_all(&mut **tx)
                .await?;
        Ok(rows.into_iter().collect())
    }

    async fn insert_security(
        &mut self,
        row: &SecurityRow,
        sec_type: SecType,
        exchange_id: i32,
    ) -> Result<()> {
        let tx = self.tx()?;
        let sql = insert_sql(&row.columns());
        let mut query = sqlx::query(&sql);
        for (field, value) in &row.values {
            query = bind_field(query, *field, value);
        }
        query = query.bind(sec_type.as_str()).bind(exchange_id);
        query.execute(&mut **tx).await?;
        debug!(bbgid = ?row.bbgid, "inserted security");
        Ok(())
    }

    async fn update_security(&mut self, row: &SecurityRow, bbgid: &str) -> Result<()> {
        let tx = self.tx()?;
        let sql = update_sql(&row.columns());
        let mut query = sqlx::query(&sql);
        for (field, value) in &row.values {
            query = bind_field(query, *field, value);
        }
        query = query.bind(bbgid);
        query.execute(&mut **tx).await?;
        debug!(bbgid = %bbgid, "updated security");
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let tx = self.tx.take().ok_or(StoreError::TransactionClosed)?;
        tx.commit().await?;
        Ok(())
    }
}
