//! 데이터 전송 객체(DTO)
//!
//! HTTP 요청/응답 본문과 OpenAPI 문서 스키마로 사용되는 타입들입니다.

pub mod users;

// 공통 re-exports
pub use users::*;
