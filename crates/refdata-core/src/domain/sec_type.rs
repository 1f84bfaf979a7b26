//! 증권 유형 정의.
//!
//! 증권 유형은 생성 시점에만 설정되는 닫힌 10개 값의 열거형입니다.
//! 이후 업데이트에서는 절대 수정되지 않습니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RefdataError;

/// 증권 유형 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecType {
    /// 주식
    Stk,
    /// 외환 (통화쌍)
    Cash,
    /// 원자재
    Cmdty,
    /// 선물
    Fut,
    /// 옵션
    Opt,
    /// 지수
    Ind,
    /// 선물 옵션
    Fop,
    /// 워런트
    War,
    /// 채권
    Bond,
    /// 펀드
    Fund,
}

impl SecType {
    /// 전체 증권 유형 목록.
    pub const ALL: [SecType; 10] = [
        SecType::Stk,
        SecType::Cash,
        SecType::Cmdty,
        SecType::Fut,
        SecType::Opt,
        SecType::Ind,
        SecType::Fop,
        SecType::War,
        SecType::Bond,
        SecType::Fund,
    ];

    /// 데이터베이스에 저장되는 태그 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecType::Stk => "STK",
            SecType::Cash => "CASH",
            SecType::Cmdty => "CMDTY",
            SecType::Fut => "FUT",
            SecType::Opt => "OPT",
            SecType::Ind => "IND",
            SecType::Fop => "FOP",
            SecType::War => "WAR",
            SecType::Bond => "BOND",
            SecType::Fund => "FUND",
        }
    }

    /// 도움말 출력용 태그 나열 ("STK, CASH, ...").
    pub fn tags() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SecType {
    type Err = RefdataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STK" => Ok(SecType::Stk),
            "CASH" => Ok(SecType::Cash),
            "CMDTY" => Ok(SecType::Cmdty),
            "FUT" => Ok(SecType::Fut),
            "OPT" => Ok(SecType::Opt),
            "IND" => Ok(SecType::Ind),
            "FOP" => Ok(SecType::Fop),
            "WAR" => Ok(SecType::War),
            "BOND" => Ok(SecType::Bond),
            "FUND" => Ok(SecType::Fund),
            _ => Err(RefdataError::Config(format!(
                "invalid sec_type: {}. Supported: {}",
                s,
                SecType::tags()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tags() {
        for sec_type in SecType::ALL {
            assert_eq!(sec_type.as_str().parse::<SecType>().unwrap(), sec_type);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        assert!("EQUITY".parse::<SecType>().is_err());
        // 소문자는 허용하지 않음
        assert!("stk".parse::<SecType>().is_err());
    }

    #[test]
    fn test_display_matches_wire_tag() {
        assert_eq!(SecType::Cash.to_string(), "CASH");
        assert_eq!(SecType::Fop.to_string(), "FOP");
    }

    #[test]
    fn test_tags_lists_all_ten() {
        let tags = SecType::tags();
        assert_eq!(tags.split(", ").count(), 10);
        assert!(tags.starts_with("STK"));
        assert!(tags.ends_with("FUND"));
    }
}
