//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 한곳에서 관리합니다.
//! `.env.<profile>` 파일은 `main`에서 `dotenv`로 먼저 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # API 문서 설정
//! export DOCS_TITLE="Sample API"
//! export DOCS_DESCRIPTION="Sample Project for feature request."
//! export DOCS_VERSION="1.0.0"
//! export DOCS_SCHEMA_SOURCE="derived"   # derived | annotated
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod app_config;

pub use app_config::*;
