//! 사용자 생성 요청의 검증 스키마
//!
//! 프로세스 전체에서 한 번만 생성되며 이후 변경되지 않습니다.
//! 입력 검증과 OpenAPI 문서(`UserCreateModel2`)가 모두 이 정의를 사용합니다.

use once_cell::sync::Lazy;
use regex::Regex;

use super::definition::{codes, FieldSchema, ObjectSchema};

/// 스키마 이름
pub const USER_CREATE_MODEL: &str = "UserCreateModel";

/// 성별 허용 값
pub const GENDERS: [&str; 3] = ["MALE", "FEMALE", "OTHER"];

const DIGITS_ONLY: &str = r"^\d+$";

static SCHEMA: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new(USER_CREATE_MODEL)
        .field(FieldSchema::string("fullName").required().min(7).max(30))
        .field(phone_number("phoneNumber").required())
        .field(FieldSchema::string("gender").required().valid(GENDERS))
        .field(phone_number("emergencyPhoneNumber"))
        .field(FieldSchema::string("email").email())
        .field(FieldSchema::string("password").required().min(7).max(50))
});

/// 사용자 생성 요청 스키마를 반환합니다
///
/// # Examples
///
/// ```rust,ignore
/// let schema = user_create_model();
/// let normalized = validate(schema, &payload)?;
/// ```
pub fn user_create_model() -> &'static ObjectSchema {
    &SCHEMA
}

/// 숫자 10자리 전화번호 필드
fn phone_number(name: &'static str) -> FieldSchema {
    FieldSchema::string(name)
        .length(10)
        .pattern(digits_only())
        .message(
            codes::STRING_PATTERN,
            format!("\"{name}\" should contain numbers only"),
        )
}

fn digits_only() -> Regex {
    Regex::new(DIGITS_ONLY).expect("digits-only pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_in_declaration_order() {
        let required: Vec<_> = user_create_model().required_fields().collect();
        assert_eq!(required, vec!["fullName", "phoneNumber", "gender", "password"]);
    }

    #[test]
    fn test_phone_fields_enforce_length_and_pattern() {
        for name in ["phoneNumber", "emergencyPhoneNumber"] {
            let field = user_create_model().get(name).unwrap();
            assert_eq!(field.rule.exact_length, Some(10));
            assert_eq!(field.rule.pattern.as_ref().map(Regex::as_str), Some(DIGITS_ONLY));
            assert!(field.message_for(codes::STRING_PATTERN).unwrap().contains(name));
        }
    }

    #[test]
    fn test_unknown_keys_are_disallowed() {
        assert!(!user_create_model().allow_unknown);
    }
}
