//! 사용자 스키마 문서 서비스
//!
//! 런타임 검증 스키마와 API 문서(OpenAPI) 스키마를 하나의 정의로 관리하는 실험용 서비스입니다.
//! `POST /user` 요청을 선언적 스키마로 검증하고, 같은 스키마에서 OpenAPI 스키마를 파생시켜
//! Swagger UI로 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐      ┌──────────────────┐
//! │   HTTP Routes   │      │   OpenAPI Docs   │ ← /docs, /api-docs/openapi.json
//! └─────────────────┘      └──────────────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │    Handlers     │      │  Schema Bridge   │ ← 검증 스키마 → OpenAPI 스키마
//! └─────────────────┘      └──────────────────┘
//!          │                        │
//!          ▼                        │
//! ┌─────────────────┐               │
//! │    Services     │               │
//! └─────────────────┘               │
//!          │                        │
//!          ▼                        ▼
//! ┌───────────────────────────────────────────┐
//! │     Schema Definition + Validator         │ ← 단일 정의
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_schema_docs::config::DocsConfig;
//! use user_schema_docs::docs::build_openapi;
//! use user_schema_docs::services::users::UserService;
//!
//! let outcome = UserService::instance().validate_create(&payload)?;
//! let openapi = build_openapi(&DocsConfig::from_env())?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod docs;
pub mod routes;
pub mod handlers;
