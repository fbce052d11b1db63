//! # Route Table
//!
//! 애플리케이션의 모든 라우트를 (메서드, 경로) 키로 한곳에 등록합니다.
//! 같은 키를 두 번 등록하면 서버가 뜨기 전에 `AppError::DuplicateRoute`로 실패하므로,
//! 핸들러가 조용히 겹쳐 등록되는 일이 없습니다.
//!
//! ## 등록된 라우트
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/user` | [`handlers::users::create_user`] |
//!
//! Swagger UI(`/docs`)와 OpenAPI JSON은 [`crate::docs::swagger_ui`] 서비스가 별도로 제공합니다.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Route};
use serde_json::json;

use crate::core::errors::{AppError, AppResult};
use crate::handlers;

/// JSON 요청 본문 최대 크기 (바이트)
pub const JSON_PAYLOAD_LIMIT: usize = 32 * 1024;

/// 메서드 가드가 적용된 `Route`에 핸들러를 연결하는 함수
pub type RouteBuilder = fn(Route) -> Route;

/// 라우트 테이블 항목
#[derive(Clone)]
struct RouteEntry {
    method: Method,
    path: &'static str,
    build: RouteBuilder,
}

/// (메서드, 경로) 키로 중복 등록을 거부하는 라우트 테이블
///
/// # Examples
///
/// ```rust,ignore
/// let table = RouteTable::new()
///     .add(Method::POST, "/user", |route| route.to(create_user))?;
///
/// // 같은 키를 다시 등록하면 실패
/// assert!(table.add(Method::POST, "/user", |route| route.to(create_user)).is_err());
/// ```
#[derive(Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 라우트를 등록합니다
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateRoute` - 같은 메서드와 경로가 이미 등록된 경우
    pub fn add(mut self, method: Method, path: &'static str, build: RouteBuilder) -> AppResult<Self> {
        if self.contains(&method, path) {
            return Err(AppError::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        self.entries.push(RouteEntry { method, path, build });
        Ok(self)
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.method == *method && entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 테이블의 모든 라우트를 Actix 서비스 설정에 등록합니다
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        for entry in &self.entries {
            let route = web::route().method(entry.method.clone());
            cfg.route(entry.path, (entry.build)(route));
        }
    }
}

/// 애플리케이션 라우트 테이블을 생성합니다
///
/// `main`에서 서버 바인딩 전에 한 번 호출되어 중복 등록을 검사합니다.
pub fn application_routes() -> AppResult<RouteTable> {
    RouteTable::new()
        .add(Method::GET, "/health", |route| route.to(health_check))?
        .add(Method::POST, "/user", |route| route.to(handlers::users::create_user))
}

/// 모든 라우트와 JSON 추출기 설정을 등록합니다
///
/// # Examples
///
/// ```rust,ignore
/// let routes = application_routes()?;
/// let app = App::new().configure(|cfg| configure_all_routes(cfg, &routes));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, routes: &RouteTable) {
    cfg.app_data(json_config());
    routes.configure(cfg);
}

/// JSON 추출기 설정
///
/// 파싱할 수 없는 본문은 `AppError::MalformedJson`(400)으로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req: &HttpRequest| AppError::MalformedJson(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_schema_docs",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
