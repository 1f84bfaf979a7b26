//! # Refdata Core
//!
//! 레퍼런스 데이터 관리 도구의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 증권 유형 및 필드 스키마 정의
//! - 심볼 목록 파일의 행 매핑 및 타입 변환
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
