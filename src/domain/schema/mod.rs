//! 검증 스키마 정의와 검증기
//!
//! - [`definition`] - 선언적 스키마 타입 (`ObjectSchema`, `FieldSchema`, `StringRule`)
//! - [`validate`] - 페이로드 검증 및 정규화
//! - [`report`] - 필드별 검증 에러 모음
//! - [`user_create`] - 사용자 생성 요청 스키마

pub mod definition;
pub mod report;
pub mod user_create;
pub mod validate;

pub use definition::{codes, FieldSchema, ObjectSchema, StringRule};
pub use report::ValidationReport;
pub use user_create::{user_create_model, GENDERS, USER_CREATE_MODEL};
pub use validate::validate;
