//! 검증 실패 보고서
//!
//! 필드 이름별로 `validator::ValidationError` 목록을 모읍니다.
//! JSON으로 직렬화하면 다음과 같은 형태가 됩니다.
//!
//! ```json
//! {
//!   "phoneNumber": [
//!     {
//!       "code": "string.pattern.base",
//!       "message": "\"phoneNumber\" should contain numbers only",
//!       "params": { "label": "phoneNumber", "key": "phoneNumber", "regex": "^\\d+$", "value": "12345abcde" }
//!     }
//!   ]
//! }
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use validator::ValidationError;

/// 필드별 검증 에러 모음
///
/// 첫 번째 에러에서 멈추지 않고 위반된 제약을 모두 기록합니다.
/// 필드는 처음 에러가 기록된 순서(스키마 선언 순서)를 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationReport {
    errors: Vec<(String, Vec<ValidationError>)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, error: ValidationError) {
        let field = field.into();
        match self.errors.iter_mut().find(|(name, _)| *name == field) {
            Some((_, errors)) => errors.push(error),
            None => self.errors.push((field, vec![error])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 에러가 기록된 필드 수
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|(name, _)| name == field)
    }

    pub fn field_errors(&self, field: &str) -> &[ValidationError] {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, errors)| errors.as_slice())
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(name, _)| name.as_str())
    }

    /// 특정 필드에 해당 코드의 에러가 있는지 확인합니다
    pub fn has_code(&self, field: &str, code: &str) -> bool {
        self.field_errors(field).iter().any(|error| error.code == code)
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, errors) in &self.errors {
            map.serialize_entry(field, errors)?;
        }
        map.end()
    }
}
