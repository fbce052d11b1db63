//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 표현합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 파싱 (실패 시 400 Bad Request)
//! 2. **스키마 검증**: [`crate::domain::schema`]의 선언적 스키마로 필드 규칙 검사
//!    (실패 시 422 Unprocessable Entity)
//! 3. **타입 변환**: 검증된 값을 [`UserCreateModel`]로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::UserCreateModel;
//! use crate::domain::schema::{user_create_model, validate};
//!
//! let normalized = validate(user_create_model(), &payload)?;
//! let model: UserCreateModel = serde_json::from_value(normalized.into())?;
//! ```

pub mod create_user;

pub use create_user::{Gender, UserCreateModel};
