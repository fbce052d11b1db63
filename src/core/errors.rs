//! # Application Error Handling System
//!
//! 서비스 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?`로 전파한 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `Validation` | 422 Unprocessable Entity | 스키마 검증 실패 |
//! | `MalformedJson` | 400 Bad Request | 요청 본문 JSON 파싱 실패 |
//! | `DuplicateRoute` | 500 Internal Server Error | 같은 (메서드, 경로) 중복 등록 (시작 시점) |
//! | `ConfigError` | 500 Internal Server Error | 문서/설정 구성 실패 (시작 시점) |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "message": "validation Error",
//!   "error": { "fullName": [{ "code": "any.required", "message": "\"fullName\" is required", "params": {} }] }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use thiserror::Error;

use crate::domain::dto::users::response::{
    ErrorResponse, ValidationErrorResponse, MALFORMED_JSON_MESSAGE,
};
use crate::domain::schema::ValidationReport;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (422 Unprocessable Entity)
    ///
    /// 위반된 제약을 모두 담은 보고서를 그대로 응답 본문에 포함합니다.
    /// 클라이언트 입력 문제이므로 서버 로그에는 에러로 남기지 않습니다.
    #[error("validation Error: {0}")]
    Validation(#[from] ValidationReport),

    /// 요청 본문 파싱 에러 (400 Bad Request)
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// 같은 메서드와 경로에 대한 중복 라우트 등록
    #[error("Duplicate route registration: {method} {path}")]
    DuplicateRoute { method: String, path: String },

    /// 설정 및 문서 구성 에러
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 상세 내용을 기록하고, 클라이언트에는 요약 메시지만 전달합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(report) => HttpResponse::build(status)
                .json(ValidationErrorResponse::new(report.clone())),
            AppError::MalformedJson(detail) => HttpResponse::build(status)
                .json(ErrorResponse::new(MALFORMED_JSON_MESSAGE, detail.as_str())),
            other => {
                error!("요청 처리 실패: {}", other);
                HttpResponse::build(status)
                    .json(ErrorResponse::new("internal error", other.to_string()))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let model: UserCreateModel = serde_json::from_value(value)
///     .context("정규화된 값을 UserCreateModel로 변환하지 못했습니다")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use validator::ValidationError;

    #[test]
    fn test_validation_error_response() {
        let mut report = ValidationReport::new();
        report.add("gender", ValidationError::new("any.required"));
        let error = AppError::from(report);

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_validation_error_body() {
        let mut report = ValidationReport::new();
        report.add("gender", ValidationError::new("any.required"));

        let response = AppError::Validation(report).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "validation Error");
        assert_eq!(json["error"]["gender"][0]["code"], "any.required");
    }

    #[test]
    fn test_malformed_json_response() {
        let error = AppError::MalformedJson("EOF while parsing".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_startup_errors_are_internal() {
        let duplicate = AppError::DuplicateRoute {
            method: "POST".to_string(),
            path: "/user".to_string(),
        };
        assert_eq!(duplicate.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(duplicate.to_string(), "Duplicate route registration: POST /user");

        let config = AppError::ConfigError("missing request body".to_string());
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
