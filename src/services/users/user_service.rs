//! 사용자 서비스
//!
//! 사용자 생성 요청을 스키마로 검증하고 정규화된 값을 반환합니다.
//! 저장소 계층이 없으므로 검증 결과를 그대로 돌려주는 것이 전부입니다.

use log::debug;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::dto::users::request::UserCreateModel;
use crate::domain::dto::users::response::ValidationOutcome;
use crate::domain::schema::{user_create_model, validate, ObjectSchema};

static INSTANCE: Lazy<UserService> = Lazy::new(|| UserService::new(user_create_model()));

/// 사용자 생성 검증 서비스
///
/// 읽기 전용 스키마만 보유하므로 모든 워커가 하나의 인스턴스를 공유합니다.
#[derive(Debug, Clone, Copy)]
pub struct UserService {
    schema: &'static ObjectSchema,
}

impl UserService {
    pub fn new(schema: &'static ObjectSchema) -> Self {
        Self { schema }
    }

    /// 프로세스 전역 인스턴스
    pub fn instance() -> &'static UserService {
        &INSTANCE
    }

    /// 사용자 생성 요청을 검증합니다
    ///
    /// 검증 결과는 호출마다 새로 만들어지며 다른 요청과 공유되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 하나 이상의 제약 위반 (전체 목록 포함)
    /// * `AppError::InternalError` - 검증된 값을 타입으로 변환하지 못한 경우
    pub fn validate_create(&self, payload: &Value) -> AppResult<ValidationOutcome> {
        let normalized = validate(self.schema, payload).inspect_err(|report| {
            debug!("{} 검증 실패: {:?}", self.schema.name, report.fields().collect::<Vec<_>>());
        })?;

        let value: UserCreateModel = serde_json::from_value(Value::Object(normalized))
            .context("정규화된 값을 UserCreateModel로 변환하지 못했습니다")?;

        // 사용자 저장은 하지 않음: 검증 결과만 반환
        Ok(ValidationOutcome { value })
    }
}
