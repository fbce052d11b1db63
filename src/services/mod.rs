//! 비즈니스 로직 계층
//!
//! - [`users`] - 사용자 생성 요청 검증

pub mod users;
