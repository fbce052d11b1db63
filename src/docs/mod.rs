//! # OpenAPI 문서 생성
//!
//! `utoipa` derive 매크로로 작성된 라우트/스키마 문서를 하나의 OpenAPI 문서로 조립하고,
//! 검증 스키마에서 파생된 스키마([`bridge`])를 주입한 뒤 Swagger UI로 제공합니다.
//!
//! ## 문서 구성
//!
//! - `UserCreateModel` - DTO 속성으로 직접 작성한 스키마
//! - `UserCreateModel2` - 검증 스키마에서 파생된 스키마
//! - `POST /user` 요청 본문 - [`SchemaSource`]에 따라 둘 중 하나를 `$ref`로 참조
//!
//! ## 제공 경로
//!
//! - `GET /docs` - `/docs/`로 리다이렉트
//! - `GET /docs/` - Swagger UI
//! - `GET /api-docs/openapi.json` - OpenAPI 문서 원본

pub mod bridge;

use actix_web::web;
use log::info;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::{OpenApi as OpenApiDocument, Ref, RefOr};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{DocsConfig, SchemaSource};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserCreateModel;
use crate::domain::dto::users::response::{
    CreateUserResponse, ErrorResponse, ValidationErrorResponse, ValidationOutcome,
};
use crate::domain::schema::user_create_model;

/// Swagger UI 진입 경로 (`/docs/`로 리다이렉트)
pub const DOCS_PATH: &str = "/docs";

/// Swagger UI 경로
pub const SWAGGER_UI_PATH: &str = "/docs/{_:.*}";

/// OpenAPI 문서 JSON 경로
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

const USER_PATH: &str = "/user";
const JSON_CONTENT_TYPE: &str = "application/json";

/// 라우트 문서와 직접 작성한 스키마를 모은 OpenAPI 정의
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::users::create_user),
    components(schemas(
        UserCreateModel,
        ValidationOutcome,
        CreateUserResponse,
        ValidationErrorResponse,
        ErrorResponse,
    )),
    tags((name = "User", description = "사용자 생성 요청 검증"))
)]
pub struct ApiDoc;

/// 서비스할 OpenAPI 문서를 생성합니다
///
/// 1. `ApiDoc`에서 라우트 문서와 직접 작성한 스키마를 가져옵니다
/// 2. 설정의 제목, 설명, 버전을 적용합니다
/// 3. 검증 스키마에서 파생된 `UserCreateModel2`를 주입합니다
/// 4. `POST /user` 요청 본문의 `$ref`를 설정된 스키마로 지정합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - `POST /user` 요청 본문 문서를 찾을 수 없는 경우
pub fn build_openapi(config: &DocsConfig) -> AppResult<OpenApiDocument> {
    let mut doc = ApiDoc::openapi();

    doc.info.title = config.title.clone();
    doc.info.description = Some(config.description.clone());
    doc.info.version = config.version.clone();

    let derived = bridge::object_schema_to_openapi(user_create_model());
    doc.components
        .get_or_insert_with(Default::default)
        .schemas
        .insert(
            SchemaSource::DERIVED_SCHEMA.to_string(),
            RefOr::T(Schema::Object(derived)),
        );

    point_request_body(&mut doc, config.schema_source)?;

    Ok(doc)
}

/// `POST /user` 요청 본문이 참조할 스키마를 지정합니다
fn point_request_body(doc: &mut OpenApiDocument, source: SchemaSource) -> AppResult<()> {
    let media = doc
        .paths
        .paths
        .get_mut(USER_PATH)
        .and_then(|item| item.post.as_mut())
        .and_then(|operation| operation.request_body.as_mut())
        .and_then(|body| body.content.get_mut(JSON_CONTENT_TYPE))
        .ok_or_else(|| {
            AppError::ConfigError(format!(
                "POST {} 요청 본문({}) 문서가 없습니다",
                USER_PATH, JSON_CONTENT_TYPE
            ))
        })?;

    media.schema = Some(RefOr::Ref(Ref::from_schema_name(source.schema_name())));
    Ok(())
}

/// 파생된 스키마를 보기 좋은 JSON으로 로그에 남깁니다
pub fn log_derived_schema(doc: &OpenApiDocument) {
    let derived = doc
        .components
        .as_ref()
        .and_then(|components| components.schemas.get(SchemaSource::DERIVED_SCHEMA));

    match derived.map(serde_json::to_string_pretty) {
        Some(Ok(json)) => info!("📘 {}:\n{}", SchemaSource::DERIVED_SCHEMA, json),
        Some(Err(e)) => info!("📘 {} 직렬화 실패: {}", SchemaSource::DERIVED_SCHEMA, e),
        None => info!("📘 {} 스키마가 문서에 없습니다", SchemaSource::DERIVED_SCHEMA),
    }
}

/// Swagger UI 서비스를 생성합니다
pub fn swagger_ui(doc: OpenApiDocument) -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, doc)
}

/// `/docs` 리다이렉트와 Swagger UI를 등록합니다
///
/// ```rust,ignore
/// let app = App::new().configure(|cfg| docs::configure_docs(cfg, openapi.clone()));
/// ```
pub fn configure_docs(cfg: &mut web::ServiceConfig, doc: OpenApiDocument) {
    cfg.service(web::redirect(DOCS_PATH, format!("{DOCS_PATH}/")))
        .service(swagger_ui(doc));
}
