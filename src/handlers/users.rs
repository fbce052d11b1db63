//! # User HTTP Handlers
//!
//! 사용자 생성 요청을 처리하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user` | 사용자 생성 요청 검증 | 200 OK / 422 Unprocessable Entity |
//!
//! ## 처리 흐름
//!
//! ```text
//! JSON 본문 ──▶ UserService::validate_create ──▶ 200 { value: { value: ... } }
//!                         │
//!                         └─ 위반 사항 ──▶ 422 { message: "validation Error", error: {...} }
//! ```

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserCreateModel;
use crate::domain::dto::users::response::{
    CreateUserResponse, ErrorResponse, ValidationErrorResponse,
};
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// 요청 본문을 검증하고 정규화된 값을 그대로 반환합니다. 사용자는 저장되지 않습니다.
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "value": { "value": { "fullName": "Jane Doe Smith", "phoneNumber": "1234567890", "gender": "MALE", "password": "secret12" } } }
/// ```
///
/// ## 검증 실패 (422 Unprocessable Entity)
/// ```json
/// { "message": "validation Error", "error": { "phoneNumber": [{ "code": "string.pattern.base", "message": "\"phoneNumber\" should contain numbers only", "params": {} }] } }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/user \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Jane Doe Smith","phoneNumber":"1234567890","gender":"MALE","password":"secret12"}'
/// ```
#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    description = "Create a user",
    request_body(content = UserCreateModel, content_type = "application/json"),
    responses(
        (status = 200, description = "Returns a user object.", body = CreateUserResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse),
    )
)]
pub async fn create_user(payload: web::Json<Value>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let outcome = service.validate_create(&payload)?;

    Ok(HttpResponse::Ok().json(CreateUserResponse::from(outcome)))
}

#[cfg(test)]
mod tests {
    use crate::routes::{application_routes, configure_all_routes};
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use serde_json::{json, Value};

    fn valid_payload() -> Value {
        json!({
            "fullName": "Jane Doe Smith",
            "phoneNumber": "1234567890",
            "gender": "MALE",
            "password": "secret12"
        })
    }

    async fn post_user(payload: &Value) -> (StatusCode, Value) {
        let routes = application_routes().unwrap();
        let app = init_service(
            App::new().configure(|cfg| configure_all_routes(cfg, &routes)),
        )
        .await;

        let request = TestRequest::post()
            .uri("/user")
            .set_json(payload)
            .to_request();
        let response = call_service(&app, request).await;
        let status = response.status();
        let body: Value = read_body_json(response).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_payload_is_echoed() {
        let (status, body) = post_user(&valid_payload()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"]["value"]["fullName"], "Jane Doe Smith");
        assert_eq!(body["value"]["value"]["gender"], "MALE");
        assert!(body["value"].get("error").is_none());
    }

    #[actix_web::test]
    async fn test_each_missing_required_field_is_reported() {
        for field in ["fullName", "phoneNumber", "gender", "password"] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);

            let (status, body) = post_user(&payload).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "missing {field}");
            assert_eq!(body["message"], "validation Error");
            assert_eq!(body["error"][field][0]["code"], "any.required");
        }
    }

    #[actix_web::test]
    async fn test_non_digit_phone_number_uses_custom_message() {
        let mut payload = valid_payload();
        payload["phoneNumber"] = json!("12345abcde");

        let (status, body) = post_user(&payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let messages: Vec<_> = body["error"]["phoneNumber"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|error| error["message"].as_str())
            .collect();
        assert!(messages.contains(&"\"phoneNumber\" should contain numbers only"));
    }

    #[actix_web::test]
    async fn test_short_phone_number_fails() {
        let mut payload = valid_payload();
        payload["phoneNumber"] = json!("12345");

        let (status, body) = post_user(&payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["phoneNumber"][0]["code"], "string.length");
    }

    #[actix_web::test]
    async fn test_multiple_violations_in_one_response() {
        let (status, body) = post_user(&json!({
            "fullName": "Jane",
            "phoneNumber": "1234567890",
            "gender": "ROBOT",
            "password": "secret12",
            "role": "admin"
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["fullName"][0]["code"], "string.min");
        assert_eq!(body["error"]["gender"][0]["code"], "any.only");
        assert_eq!(body["error"]["role"][0]["code"], "object.unknown");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let routes = application_routes().unwrap();
        let app = init_service(
            App::new().configure(|cfg| configure_all_routes(cfg, &routes)),
        )
        .await;

        let request = TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"fullName\": ")
            .to_request();
        let response = call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(response).await;
        assert_eq!(body["message"], "malformed JSON");
    }
}
