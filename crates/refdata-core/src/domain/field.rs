//! 증권 필드 스키마 정의.
//!
//! 심볼 목록 파일은 고정된 19개 위치의 구분자 형식이며, 일부 위치는
//! 사용하지 않습니다. 위치별 매핑은 `LINE_SCHEMA` 배열 하나로 표현됩니다.

/// 심볼 목록 파일에서 매핑되는 증권 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityField {
    Symbol,
    LocalSymbol,
    Currency,
    Bbgid,
    Sedol,
    Isin,
    Cusip,
    ClosePrice,
    Adv20,
    MarketCap,
    Sector,
    IndustryGroup,
    Industry,
    SubIndustry,
    LotSize,
    Multiplier,
}

/// 필드의 값 범주.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 텍스트 필드
    Text,
    /// 금액/규모 필드 (부동소수점)
    Float,
    /// 분류 코드 필드 (정수)
    Int,
}

impl SecurityField {
    /// security 테이블의 컬럼명.
    pub fn column(&self) -> &'static str {
        match self {
            SecurityField::Symbol => "symbol",
            SecurityField::LocalSymbol => "local_symbol",
            SecurityField::Currency => "currency",
            SecurityField::Bbgid => "bbgid",
            SecurityField::Sedol => "sedol",
            SecurityField::Isin => "isin",
            SecurityField::Cusip => "cusip",
            SecurityField::ClosePrice => "close_price",
            SecurityField::Adv20 => "adv20",
            SecurityField::MarketCap => "market_cap",
            SecurityField::Sector => "sector",
            SecurityField::IndustryGroup => "industry_group",
            SecurityField::Industry => "industry",
            SecurityField::SubIndustry => "sub_industry",
            SecurityField::LotSize => "lot_size",
            SecurityField::Multiplier => "multiplier",
        }
    }

    /// 필드의 값 범주.
    pub fn kind(&self) -> FieldKind {
        match self {
            SecurityField::ClosePrice
            | SecurityField::Adv20
            | SecurityField::MarketCap
            | SecurityField::LotSize
            | SecurityField::Multiplier => FieldKind::Float,
            SecurityField::Sector
            | SecurityField::IndustryGroup
            | SecurityField::Industry
            | SecurityField::SubIndustry => FieldKind::Int,
            _ => FieldKind::Text,
        }
    }
}

/// 심볼 목록 파일의 위치별 스키마.
///
/// `None` 위치는 무시되는 컬럼입니다.
pub const LINE_SCHEMA: [Option<SecurityField>; 19] = [
    Some(SecurityField::Symbol),
    Some(SecurityField::LocalSymbol),
    None,
    Some(SecurityField::Currency),
    Some(SecurityField::Bbgid),
    Some(SecurityField::Sedol),
    Some(SecurityField::Isin),
    Some(SecurityField::Cusip),
    Some(SecurityField::ClosePrice),
    Some(SecurityField::Adv20),
    Some(SecurityField::MarketCap),
    Some(SecurityField::Sector),
    Some(SecurityField::IndustryGroup),
    Some(SecurityField::Industry),
    Some(SecurityField::SubIndustry),
    None,
    Some(SecurityField::LotSize),
    Some(SecurityField::Multiplier),
    None,
];

/// 타입 변환이 끝난 필드 값.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 빈 토큰 (모든 필드 공통)
    Null,
    Text(String),
    Float(f64),
    Int(i32),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}
