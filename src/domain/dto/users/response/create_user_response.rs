//! 사용자 생성 응답 DTO
//!
//! 검증에 성공한 요청은 저장되지 않고 정규화된 값 그대로 반환됩니다.
//!
//! ```json
//! {
//!   "value": {
//!     "value": {
//!       "fullName": "Jane Doe Smith",
//!       "phoneNumber": "1234567890",
//!       "gender": "MALE",
//!       "password": "secret12"
//!     }
//!   }
//! }
//! ```

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::dto::users::request::UserCreateModel;

/// 단일 요청의 검증 결과
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationOutcome {
    /// 정규화된 요청 값
    pub value: UserCreateModel,
}

/// `POST /user` 성공 응답 (200 OK)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreateUserResponse {
    pub value: ValidationOutcome,
}

impl From<ValidationOutcome> for CreateUserResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        Self { value: outcome }
    }
}
