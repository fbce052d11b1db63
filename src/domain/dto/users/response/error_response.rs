//! 에러 응답 DTO
//!
//! [`crate::core::errors::AppError`]가 HTTP 응답으로 변환될 때 사용하는 본문 형식입니다.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::schema::ValidationReport;

/// 검증 실패 응답 메시지
pub const VALIDATION_ERROR_MESSAGE: &str = "validation Error";

/// 잘못된 JSON 응답 메시지
pub const MALFORMED_JSON_MESSAGE: &str = "malformed JSON";

/// 검증 실패 응답 (422 Unprocessable Entity)
///
/// ```json
/// {
///   "message": "validation Error",
///   "error": {
///     "gender": [{ "code": "any.required", "message": "\"gender\" is required", "params": { "label": "gender", "key": "gender" } }]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "validation Error")]
    pub message: String,

    /// 필드 이름별 검증 에러 목록
    #[schema(value_type = Object)]
    pub error: ValidationReport,
}

impl ValidationErrorResponse {
    pub fn new(report: ValidationReport) -> Self {
        Self {
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            error: report,
        }
    }
}

/// 일반 에러 응답 (400, 500)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "malformed JSON")]
    pub message: String,

    /// 상세 원인
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
        }
    }
}
