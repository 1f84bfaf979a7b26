//! # Refdata DB
//!
//! PostgreSQL 저장소 계층과 증권 적재기를 제공합니다.
//!
//! - `store` - 단일 트랜잭션 기반 `SecurityStore` 트레이트와 Postgres 구현
//! - `loader` - 심볼 목록 파일을 읽어 insert/update를 결정하는 적재기
//! - `rates` - CASH 증권 종가 기반 USD 환율 갱신
//! - `pool` - 연결 풀 생성

pub mod error;
pub mod loader;
pub mod pool;
pub mod rates;
pub mod store;

pub use error::*;
pub use loader::*;
pub use rates::*;
pub use store::*;
