//! # 사용자 생성 요청 DTO
//!
//! 검증을 통과한 사용자 생성 요청의 타입 표현입니다.
//! OpenAPI 문서의 `UserCreateModel` 스키마는 이 구조체의 `#[schema(...)]` 속성에서
//! 직접 작성된 문서용 스키마입니다.
//!
//! 런타임 검증 규칙은 [`crate::domain::schema::user_create_model`]이 담당하며,
//! 같은 규칙에서 파생된 문서 스키마는 `UserCreateModel2`로 함께 제공됩니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 필수 |
//! |------|------|------|
//! | `fullName` | 7-30자 | O |
//! | `phoneNumber` | 숫자 10자리 | O |
//! | `gender` | `MALE`, `FEMALE`, `OTHER` | O |
//! | `emergencyPhoneNumber` | 숫자 10자리 | |
//! | `email` | 이메일 형식 | |
//! | `password` | 7-50자 | O |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "fullName": "Jane Doe Smith",
//!   "phoneNumber": "1234567890",
//!   "gender": "MALE",
//!   "password": "secret12"
//! }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// 사용자 생성 요청 (문서용 스키마 `UserCreateModel`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateModel {
    #[schema(min_length = 7, max_length = 30)]
    pub full_name: String,

    #[schema(min_length = 10, max_length = 10, pattern = r"^\d+$")]
    pub phone_number: String,

    #[schema(inline)]
    pub gender: Gender,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false, min_length = 10, max_length = 10, pattern = r"^\d+$")]
    pub emergency_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false, format = "email")]
    pub email: Option<String>,

    #[schema(min_length = 7, max_length = 50)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_payload() {
        let model: UserCreateModel = serde_json::from_value(json!({
            "fullName": "Jane Doe Smith",
            "phoneNumber": "1234567890",
            "gender": "FEMALE",
            "password": "secret12"
        }))
        .unwrap();

        assert_eq!(model.gender, Gender::Female);
        assert_eq!(model.email, None);
    }

    #[test]
    fn test_absent_optional_fields_are_not_serialized() {
        let model = UserCreateModel {
            full_name: "Jane Doe Smith".to_string(),
            phone_number: "1234567890".to_string(),
            gender: Gender::Other,
            emergency_phone_number: None,
            email: None,
            password: "secret12".to_string(),
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["gender"], "OTHER");
        assert!(json.get("email").is_none());
        assert!(json.get("emergencyPhoneNumber").is_none());
    }
}
