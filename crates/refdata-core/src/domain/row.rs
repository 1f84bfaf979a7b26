//! 심볼 목록 파일의 행 매핑 및 타입 변환.
//!
//! 한 행을 토큰으로 분리하고 위치별 스키마(`LINE_SCHEMA`)에 따라
//! (필드, 값) 쌍의 목록으로 변환합니다. 빈 토큰은 필드와 무관하게
//! null이 되고, 금액/규모 필드는 f64, 분류 코드 필드는 i32로
//! 변환됩니다.

use crate::domain::field::{FieldKind, FieldValue, SecurityField, LINE_SCHEMA};
use crate::error::{RefdataError, RefdataResult};

/// 매핑과 타입 변환이 끝난 한 행.
#[derive(Debug, Clone)]
pub struct SecurityRow {
    /// 스키마 순서대로 매핑된 (필드, 값) 쌍
    pub values: Vec<(SecurityField, FieldValue)>,
    /// 행에서 추출한 고유 코드 (빈 토큰이면 None)
    pub bbgid: Option<String>,
}

impl SecurityRow {
    /// 매핑된 컬럼명 목록을 반환합니다.
    pub fn columns(&self) -> Vec<&'static str> {
        self.values.iter().map(|(f, _)| f.column()).collect()
    }
}

/// 한 행을 스키마에 따라 매핑하고 타입 변환합니다.
///
/// 호출자는 파일의 헤더 행을 먼저 버려야 합니다. `line_no`는 에러
/// 보고용 1부터 시작하는 행 번호입니다.
pub fn map_line(line: &str, line_no: usize) -> RefdataResult<SecurityRow> {
    let tokens: Vec<&str> = line.trim().split(',').collect();
    if tokens.len() < LINE_SCHEMA.len() {
        return Err(RefdataError::format(
            line_no,
            format!(
                "expected {} fields, got {}",
                LINE_SCHEMA.len(),
                tokens.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(16);
    let mut bbgid = None;
    for (slot, token) in LINE_SCHEMA.iter().zip(tokens) {
        let Some(field) = slot else { continue };
        let mut value = coerce(*field, token, line_no)?;
        if *field == SecurityField::Symbol {
            // 소스 심볼 필드는 접미사가 붙어 올 수 있으므로 첫 공백에서 자름
            if let FieldValue::Text(s) = &value {
                if let Some(head) = s.split_whitespace().next() {
                    value = FieldValue::Text(head.to_string());
                }
            }
        }
        if *field == SecurityField::Bbgid {
            bbgid = value.as_text().map(str::to_string);
        }
        values.push((*field, value));
    }

    Ok(SecurityRow { values, bbgid })
}

/// 토큰 하나를 필드 범주에 맞는 값으로 변환합니다.
pub fn coerce(field: SecurityField, raw: &str, line_no: usize) -> RefdataResult<FieldValue> {
    if raw.is_empty() {
        return Ok(FieldValue::Null);
    }
    match field.kind() {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Float => raw.parse::<f64>().map(FieldValue::Float).map_err(|_| {
            RefdataError::format(
                line_no,
                format!("invalid number for {}: {:?}", field.column(), raw),
            )
        }),
        FieldKind::Int => raw.parse::<i32>().map(FieldValue::Int).map_err(|_| {
            RefdataError::format(
                line_no,
                format!("invalid integer for {}: {:?}", field.column(), raw),
            )
        }),
    }
}
