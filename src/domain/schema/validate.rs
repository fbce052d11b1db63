//! 스키마 기반 입력 검증
//!
//! JSON 페이로드를 [`ObjectSchema`]에 맞춰 검사합니다. 모든 필드를 끝까지 검사한 뒤
//! 위반 사항을 [`ValidationReport`]로 한 번에 반환하며, 성공하면 선언된 필드만 담은
//! 정규화된 객체를 돌려줍니다.
//!
//! 길이와 이메일 형식 검사는 `validator` 크레이트의 검증 trait을 사용합니다.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateLength, ValidationError};

use super::definition::{codes, FieldSchema, ObjectSchema};
use super::report::ValidationReport;

/// 객체가 아닌 페이로드에 대한 에러가 기록되는 키
pub const ROOT_KEY: &str = "value";

/// 페이로드를 스키마에 맞춰 검증합니다
///
/// # Returns
///
/// * `Ok(Map)` - 선언 순서대로 정렬된, 스키마에 선언된 필드만 포함한 객체
/// * `Err(ValidationReport)` - 위반된 제약 전체
///
/// # Examples
///
/// ```rust,ignore
/// let payload = serde_json::json!({ "fullName": "Jane" });
/// let report = validate(user_create_model(), &payload).unwrap_err();
/// assert!(report.has_code("fullName", codes::STRING_MIN));
/// ```
pub fn validate(schema: &ObjectSchema, payload: &Value) -> Result<Map<String, Value>, ValidationReport> {
    let mut report = ValidationReport::new();

    let Some(object) = payload.as_object() else {
        let mut error = ValidationError::new(codes::OBJECT_BASE)
            .with_message(format!("\"{ROOT_KEY}\" must be of type object").into());
        error.add_param(Cow::Borrowed("label"), &ROOT_KEY);
        error.add_param(Cow::Borrowed("type"), &"object");
        report.add(ROOT_KEY, error);
        return Err(report);
    };

    let mut normalized = Map::new();

    for field in &schema.fields {
        match object.get(field.name) {
            None => {
                if field.required {
                    report.add(
                        field.name,
                        violation(field, codes::ANY_REQUIRED, format!("\"{}\" is required", field.name)),
                    );
                }
            }
            Some(Value::String(text)) => {
                let errors = check_string(field, text);
                if errors.is_empty() {
                    normalized.insert(field.name.to_string(), Value::String(text.clone()));
                }
                for error in errors {
                    report.add(field.name, error);
                }
            }
            Some(other) => {
                let mut error =
                    violation(field, codes::STRING_BASE, format!("\"{}\" must be a string", field.name));
                error.add_param(Cow::Borrowed("value"), other);
                report.add(field.name, error);
            }
        }
    }

    if !schema.allow_unknown {
        for key in object.keys().filter(|key| schema.get(key).is_none()) {
            let mut error = ValidationError::new(codes::OBJECT_UNKNOWN)
                .with_message(format!("\"{key}\" is not allowed").into());
            error.add_param(Cow::Borrowed("label"), key);
            error.add_param(Cow::Borrowed("key"), key);
            error.add_param(Cow::Borrowed("value"), &object[key]);
            report.add(key.as_str(), error);
        }
    }

    if report.is_empty() {
        Ok(normalized)
    } else {
        Err(report)
    }
}

/// 문자열 값에 필드 제약을 적용합니다
///
/// 허용 값 목록이 있으면 그 검사가 우선하며, 실패 시 나머지 제약은 검사하지 않습니다.
/// 빈 문자열은 `string.empty` 하나만 보고합니다.
fn check_string(field: &FieldSchema, text: &str) -> Vec<ValidationError> {
    let rule = &field.rule;
    let mut errors = Vec::new();

    if !rule.allowed.is_empty() {
        if !rule.allowed.contains(&text) {
            let mut error = violation(
                field,
                codes::ANY_ONLY,
                format!("\"{}\" must be one of [{}]", field.name, rule.allowed.join(", ")),
            );
            error.add_param(Cow::Borrowed("valids"), &rule.allowed);
            error.add_param(Cow::Borrowed("value"), &text);
            errors.push(error);
        }
        return errors;
    }

    if text.is_empty() {
        errors.push(violation(
            field,
            codes::STRING_EMPTY,
            format!("\"{}\" is not allowed to be empty", field.name),
        ));
        return errors;
    }

    if let Some(min) = rule.min_length {
        if !text.validate_length(Some(min), None, None) {
            errors.push(limit_violation(
                field,
                codes::STRING_MIN,
                format!("\"{}\" length must be at least {min} characters long", field.name),
                min,
                text,
            ));
        }
    }

    if let Some(max) = rule.max_length {
        if !text.validate_length(None, Some(max), None) {
            errors.push(limit_violation(
                field,
                codes::STRING_MAX,
                format!(
                    "\"{}\" length must be less than or equal to {max} characters long",
                    field.name
                ),
                max,
                text,
            ));
        }
    }

    if let Some(exact) = rule.exact_length {
        if !text.validate_length(None, None, Some(exact)) {
            errors.push(limit_violation(
                field,
                codes::STRING_LENGTH,
                format!("\"{}\" length must be {exact} characters long", field.name),
                exact,
                text,
            ));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(text) {
            let mut error = violation(
                field,
                codes::STRING_PATTERN,
                format!(
                    "\"{}\" with value \"{text}\" fails to match the required pattern: {}",
                    field.name,
                    pattern.as_str()
                ),
            );
            error.add_param(Cow::Borrowed("regex"), &pattern.as_str());
            error.add_param(Cow::Borrowed("value"), &text);
            errors.push(error);
        }
    }

    if rule.email && !is_email(text) {
        let mut error = violation(
            field,
            codes::STRING_EMAIL,
            format!("\"{}\" must be a valid email", field.name),
        );
        error.add_param(Cow::Borrowed("value"), &text);
        errors.push(error);
    }

    errors
}

/// 이메일 형식을 확인합니다
///
/// `validator`의 형식 검사에 더해 도메인이 점으로 구분된 두 개 이상의 부분으로
/// 이루어져야 합니다 (`jane@localhost` 거부).
fn is_email(text: &str) -> bool {
    if !text.validate_email() {
        return false;
    }

    match text.rsplit_once('@') {
        Some((_, domain)) => {
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// 필드 라벨과 (사용자 정의 메시지가 있으면 그것을, 없으면 기본) 메시지를 담은 에러를 만듭니다
fn violation(field: &FieldSchema, code: &'static str, default_message: String) -> ValidationError {
    let message = field
        .message_for(code)
        .map(str::to_owned)
        .unwrap_or(default_message);

    let mut error = ValidationError::new(code).with_message(message.into());
    error.add_param(Cow::Borrowed("label"), &field.name);
    error.add_param(Cow::Borrowed("key"), &field.name);
    error
}

fn limit_violation<T: Serialize>(
    field: &FieldSchema,
    code: &'static str,
    default_message: String,
    limit: T,
    text: &str,
) -> ValidationError {
    let mut error = violation(field, code, default_message);
    error.add_param(Cow::Borrowed("limit"), &limit);
    error.add_param(Cow::Borrowed("value"), &text);
    error
}
