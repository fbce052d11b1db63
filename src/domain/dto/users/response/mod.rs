//! 사용자 관련 응답 DTO

pub mod create_user_response;
pub mod error_response;

pub use create_user_response::{CreateUserResponse, ValidationOutcome};
pub use error_response::{
    ErrorResponse, ValidationErrorResponse, MALFORMED_JSON_MESSAGE, VALIDATION_ERROR_MESSAGE,
};
