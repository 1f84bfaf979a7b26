//! 저장소 계층 오류 타입.

use refdata_core::RefdataError;
use thiserror::Error;

/// 저장소 관련 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    /// 알 수 없는 거래소 이름
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    /// 데이터베이스 연결 오류
    #[error("Database connection error: {0}")]
    Connection(String),

    /// 쿼리 실행 오류
    #[error("Query error: {0}")]
    Query(String),

    /// 중복 레코드 (고유 제약 조건 위반)
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    /// 이미 커밋된 트랜잭션 재사용
    #[error("Transaction already committed")]
    TransactionClosed,

    /// 입력 행 오류
    #[error(transparent)]
    Row(#[from] RefdataError),

    /// 입력 파일 I/O 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().unwrap_or_default();
                if code == "23505" {
                    // PostgreSQL 고유 제약 조건 위반
                    StoreError::Duplicate(db_err.message().to_string())
                } else {
                    StoreError::Query(db_err.message().to_string())
                }
            }
            sqlx::Error::PoolTimedOut => StoreError::Connection(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_exchange_display() {
        let err = StoreError::UnknownExchange("NYSEX".to_string());
        assert_eq!(err.to_string(), "Unknown exchange: NYSEX");
    }

    #[test]
    fn test_row_error_is_transparent() {
        let err: StoreError = RefdataError::format(3, "bad token").into();
        assert_eq!(err.to_string(), "Format error at line 3: bad token");
    }
}
