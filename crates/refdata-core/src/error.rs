//! 핵심 에러 타입.
//!
//! 저장소에 도달하기 전에 발생하는 에러를 정의합니다.
//! 저장소 계층의 에러는 `refdata-db` 크레이트에서 별도로 정의됩니다.

use thiserror::Error;

/// 설정 및 입력 파일 관련 에러.
#[derive(Debug, Error)]
pub enum RefdataError {
    /// 필수 옵션 누락 또는 잘못된 값
    #[error("Configuration error: {0}")]
    Config(String),

    /// 입력 파일의 행 형식 오류 (1부터 시작하는 행 번호 포함)
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },
}

/// 핵심 작업을 위한 Result 타입.
pub type RefdataResult<T> = Result<T, RefdataError>;

impl RefdataError {
    /// 행 형식 에러를 생성합니다.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
