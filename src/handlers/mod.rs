//! HTTP 요청 핸들러
//!
//! - [`users`] - `POST /user` 사용자 생성 요청 검증

pub mod users;
