//! 도메인 모델 모듈.

pub mod field;
pub mod row;
pub mod sec_type;

pub use field::*;
pub use row::*;
pub use sec_type::*;
