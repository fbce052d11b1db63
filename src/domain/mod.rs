//! 도메인 계층
//!
//! - [`schema`] - 런타임 검증 스키마와 검증기
//! - [`dto`] - 요청/응답 DTO 및 문서용 스키마

pub mod dto;
pub mod schema;

pub use dto::*;
