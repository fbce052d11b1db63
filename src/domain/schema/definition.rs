//! 선언적 스키마 정의
//!
//! 엔티티 하나의 형태와 제약 조건을 런타임 데이터로 표현합니다.
//! 같은 정의를 입력 검증([`super::validate`])과 OpenAPI 스키마 변환
//! ([`crate::docs::bridge`])이 함께 읽으므로, 모델을 두 번 작성할 필요가 없습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::schema::{FieldSchema, ObjectSchema};
//!
//! let schema = ObjectSchema::new("LoginModel")
//!     .field(FieldSchema::string("email").required().email())
//!     .field(FieldSchema::string("password").required().min(7).max(50));
//! ```

use std::collections::BTreeMap;

use regex::Regex;

/// 검증 에러 코드
///
/// 각 코드는 위반된 제약 하나를 나타내며, 에러 응답의 `code` 필드로 그대로 노출됩니다.
pub mod codes {
    pub const OBJECT_BASE: &str = "object.base";
    pub const OBJECT_UNKNOWN: &str = "object.unknown";
    pub const ANY_REQUIRED: &str = "any.required";
    pub const ANY_ONLY: &str = "any.only";
    pub const STRING_BASE: &str = "string.base";
    pub const STRING_EMPTY: &str = "string.empty";
    pub const STRING_MIN: &str = "string.min";
    pub const STRING_MAX: &str = "string.max";
    pub const STRING_LENGTH: &str = "string.length";
    pub const STRING_PATTERN: &str = "string.pattern.base";
    pub const STRING_EMAIL: &str = "string.email";
}

/// 문자열 필드에 적용되는 제약 조건 모음
///
/// 길이는 유니코드 문자 단위로 계산합니다.
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub exact_length: Option<u64>,
    pub pattern: Option<Regex>,
    /// 허용 값 목록 (비어 있으면 제한 없음)
    pub allowed: Vec<&'static str>,
    pub email: bool,
}

/// 객체 스키마의 필드 하나
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub required: bool,
    pub rule: StringRule,
    messages: BTreeMap<&'static str, String>,
}

impl FieldSchema {
    /// 문자열 필드를 생성합니다. 기본값은 선택(optional) 필드입니다.
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            rule: StringRule::default(),
            messages: BTreeMap::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, length: u64) -> Self {
        self.rule.min_length = Some(length);
        self
    }

    pub fn max(mut self, length: u64) -> Self {
        self.rule.max_length = Some(length);
        self
    }

    /// 정확한 길이를 요구합니다
    pub fn length(mut self, length: u64) -> Self {
        self.rule.exact_length = Some(length);
        self
    }

    pub fn pattern(mut self, regex: Regex) -> Self {
        self.rule.pattern = Some(regex);
        self
    }

    /// 허용 값 목록을 지정합니다 (선언 순서 유지)
    pub fn valid<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.rule.allowed = values.into_iter().collect();
        self
    }

    pub fn email(mut self) -> Self {
        self.rule.email = true;
        self
    }

    /// 특정 에러 코드의 기본 메시지를 덮어씁니다
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// FieldSchema::string("phoneNumber")
    ///     .pattern(digits_only())
    ///     .message(codes::STRING_PATTERN, "\"phoneNumber\" should contain numbers only");
    /// ```
    pub fn message(mut self, code: &'static str, text: impl Into<String>) -> Self {
        self.messages.insert(code, text.into());
        self
    }

    /// 에러 코드에 지정된 사용자 정의 메시지를 반환합니다
    pub fn message_for(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }
}

/// 객체 형태의 스키마 정의
///
/// 필드는 선언 순서를 유지하며, 이 순서가 검증 순서와 OpenAPI `required` 목록의 순서가 됩니다.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSchema>,
    /// 선언되지 않은 키 허용 여부 (기본값: 허용하지 않음)
    pub allow_unknown: bool,
}

impl ObjectSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            allow_unknown: false,
        }
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// 필수 필드 이름을 선언 순서대로 반환합니다
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_collects_rules() {
        let field = FieldSchema::string("code")
            .required()
            .length(4)
            .pattern(Regex::new(r"^\d+$").unwrap())
            .message(codes::STRING_PATTERN, "digits only");

        assert!(field.required);
        assert_eq!(field.rule.exact_length, Some(4));
        assert_eq!(field.rule.pattern.as_ref().map(Regex::as_str), Some(r"^\d+$"));
        assert_eq!(field.message_for(codes::STRING_PATTERN), Some("digits only"));
        assert_eq!(field.message_for(codes::STRING_LENGTH), None);
    }

    #[test]
    fn test_object_schema_keeps_declaration_order() {
        let schema = ObjectSchema::new("Sample")
            .field(FieldSchema::string("b").required())
            .field(FieldSchema::string("a"))
            .field(FieldSchema::string("c").required());

        let required: Vec<_> = schema.required_fields().collect();
        assert_eq!(required, vec!["b", "c"]);
        assert!(schema.get("a").is_some());
        assert!(schema.get("z").is_none());
        assert!(!schema.allow_unknown);
    }
}
