//! 사용자 스키마 문서 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 시작 시점에 라우트 테이블과 OpenAPI 문서를 한 번 만들고, 모든 워커가 이를 공유합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_schema_docs::config::{DocsConfig, RateLimitConfig, ServerConfig};
use user_schema_docs::docs;
use user_schema_docs::routes::{application_routes, configure_all_routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 스키마 문서 서비스 시작중...");

    // 라우트 테이블 검증 (중복 등록 시 시작 실패)
    let routes = application_routes().map_err(|e| {
        error!("라우트 테이블 구성 실패: {}", e);
        std::io::Error::other(e)
    })?;
    info!("✅ 라우트 {}개 등록 완료", routes.len());

    // OpenAPI 문서 생성
    let docs_config = DocsConfig::from_env();
    let openapi = docs::build_openapi(&docs_config).map_err(|e| {
        error!("OpenAPI 문서 생성 실패: {}", e);
        std::io::Error::other(e)
    })?;
    info!(
        "📚 OpenAPI 문서 생성 완료: {} {} (요청 본문 스키마: {})",
        docs_config.title,
        docs_config.version,
        docs_config.schema_source.schema_name()
    );
    docs::log_derived_schema(&openapi);

    start_http_server(routes, openapi).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    routes: user_schema_docs::routes::RouteTable,
    openapi: utoipa::openapi::OpenApi,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/docs/", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, &routes))
            .configure(|cfg| docs::configure_docs(cfg, openapi.clone()))
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return;
        }
    };

    if let Err(e) = dotenv::from_filename(filename) {
        eprintln!("{} 파일 로드 실패 (profile: {}): {}", filename, profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 검증 실패 상세 로그
/// RUST_LOG=user_schema_docs::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// Swagger UI와 로컬 프론트엔드에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
