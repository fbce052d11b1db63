//! 검증 스키마 → OpenAPI 스키마 변환
//!
//! [`ObjectSchema`]를 OpenAPI 스키마 객체로 옮깁니다. 순수 함수이며 시작 시점에
//! 한 번 호출되어 그 결과가 문서의 `components.schemas`에 주입됩니다.
//!
//! | 스키마 규칙 | OpenAPI |
//! |-------------|---------|
//! | `min` / `max` | `minLength` / `maxLength` |
//! | `length(n)` | `minLength: n`, `maxLength: n` |
//! | `pattern` | `pattern` (정규식 원문) |
//! | `valid([...])` | `enum` |
//! | `email()` | `format: email` |
//! | `required()` | `required` 목록 (선언 순서) |
//! | `allow_unknown(false)` | `additionalProperties: false` |

use utoipa::openapi::schema::{
    AdditionalProperties, Object, ObjectBuilder, Schema, SchemaFormat, Type,
};
use utoipa::openapi::RefOr;

use crate::domain::schema::{FieldSchema, ObjectSchema};

/// 객체 스키마를 OpenAPI 스키마 객체로 변환합니다
///
/// # Examples
///
/// ```rust,ignore
/// let derived = object_schema_to_openapi(user_create_model());
/// components.schemas.insert("UserCreateModel2".into(), RefOr::T(Schema::Object(derived)));
/// ```
pub fn object_schema_to_openapi(schema: &ObjectSchema) -> Object {
    let mut builder = ObjectBuilder::new().schema_type(Type::Object);

    for field in &schema.fields {
        builder = builder.property(field.name, RefOr::T(field_to_openapi(field)));
        if field.required {
            builder = builder.required(field.name);
        }
    }

    if !schema.allow_unknown {
        builder = builder.additional_properties(Some(AdditionalProperties::<Schema>::FreeForm(false)));
    }

    builder.build()
}

fn field_to_openapi(field: &FieldSchema) -> Schema {
    let rule = &field.rule;

    let (min_length, max_length) = match rule.exact_length {
        Some(exact) => (Some(exact), Some(exact)),
        None => (rule.min_length, rule.max_length),
    };

    let mut builder = ObjectBuilder::new()
        .schema_type(Type::String)
        .min_length(min_length.map(|n| n as usize))
        .max_length(max_length.map(|n| n as usize))
        .pattern(rule.pattern.as_ref().map(|regex| regex.as_str()));

    if !rule.allowed.is_empty() {
        builder = builder.enum_values(Some(rule.allowed.iter().copied()));
    }

    if rule.email {
        builder = builder.format(Some(SchemaFormat::Custom("email".to_string())));
    }

    Schema::Object(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::user_create_model;
    use serde_json::{json, Value};

    fn derived() -> Value {
        serde_json::to_value(object_schema_to_openapi(user_create_model())).unwrap()
    }

    #[test]
    fn test_required_fields_and_additional_properties() {
        let schema = derived();

        assert_eq!(schema["type"], "object");
        assert_eq!(
            schema["required"],
            json!(["fullName", "phoneNumber", "gender", "password"])
        );
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_string_constraints() {
        let properties = &derived()["properties"];

        assert_eq!(properties["fullName"]["type"], "string");
        assert_eq!(properties["fullName"]["minLength"], 7);
        assert_eq!(properties["fullName"]["maxLength"], 30);

        for phone in ["phoneNumber", "emergencyPhoneNumber"] {
            assert_eq!(properties[phone]["minLength"], 10);
            assert_eq!(properties[phone]["maxLength"], 10);
            assert_eq!(properties[phone]["pattern"], r"^\d+$");
        }

        assert_eq!(properties["gender"]["enum"], json!(["MALE", "FEMALE", "OTHER"]));
        assert_eq!(properties["email"]["format"], "email");
        assert_eq!(properties["password"]["maxLength"], 50);
    }

    #[test]
    fn test_open_schema_omits_additional_properties() {
        let open = user_create_model().clone().allow_unknown(true);
        let schema = serde_json::to_value(object_schema_to_openapi(&open)).unwrap();

        assert!(schema.get("additionalProperties").is_none());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derived(), derived());
    }
}
