//! 공통 핵심 모듈
//!
//! - [`errors`] - 애플리케이션 전역 에러 타입과 HTTP 응답 변환

pub mod errors;

pub use errors::*;
