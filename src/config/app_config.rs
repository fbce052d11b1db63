//! 서버, API 문서, Rate Limiting 설정

use std::env;
use std::str::FromStr;

use log::{error, warn};

/// 숫자형 환경 변수를 읽고, 없거나 잘못된 값이면 기본값을 사용합니다
fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

fn string_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn port() -> u16 {
        parse_env("PORT", Self::DEFAULT_PORT)
    }

    pub fn host() -> String {
        string_env("HOST", "0.0.0.0")
    }

    /// 워커 스레드 수
    pub fn workers() -> usize {
        parse_env("WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 본문 `$ref`가 가리킬 문서 스키마
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaSource {
    /// 직접 작성한 `UserCreateModel`
    Annotated,
    /// 검증 스키마에서 파생된 `UserCreateModel2`
    #[default]
    Derived,
}

impl SchemaSource {
    pub const ANNOTATED_SCHEMA: &'static str = "UserCreateModel";
    pub const DERIVED_SCHEMA: &'static str = "UserCreateModel2";

    pub fn schema_name(&self) -> &'static str {
        match self {
            SchemaSource::Annotated => Self::ANNOTATED_SCHEMA,
            SchemaSource::Derived => Self::DERIVED_SCHEMA,
        }
    }
}

impl FromStr for SchemaSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annotated" | "annotation" | "manual" => Ok(SchemaSource::Annotated),
            "derived" | "validator" => Ok(SchemaSource::Derived),
            other => Err(format!("알 수 없는 스키마 소스: {other}")),
        }
    }
}

/// OpenAPI 문서 메타데이터 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    pub title: String,
    pub description: String,
    pub version: String,
    pub schema_source: SchemaSource,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: "Sample API".to_string(),
            description: "Sample Project for feature request.".to_string(),
            version: "1.0.0".to_string(),
            schema_source: SchemaSource::default(),
        }
    }
}

impl DocsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let schema_source = match env::var("DOCS_SCHEMA_SOURCE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}. 기본값 derived 사용", e);
                SchemaSource::default()
            }),
            Err(_) => defaults.schema_source,
        };

        Self {
            title: string_env("DOCS_TITLE", &defaults.title),
            description: string_env("DOCS_DESCRIPTION", &defaults.description),
            version: string_env("DOCS_VERSION", &defaults.version),
            schema_source,
        }
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_source_from_string() {
        assert_eq!("derived".parse(), Ok(SchemaSource::Derived));
        assert_eq!("Annotated".parse(), Ok(SchemaSource::Annotated));
        assert!("unknown".parse::<SchemaSource>().is_err());
    }

    #[test]
    fn test_schema_source_names() {
        assert_eq!(SchemaSource::Annotated.schema_name(), "UserCreateModel");
        assert_eq!(SchemaSource::Derived.schema_name(), "UserCreateModel2");
        assert_eq!(SchemaSource::default(), SchemaSource::Derived);
    }

    #[test]
    fn test_docs_config_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.title, "Sample API");
        assert_eq!(config.description, "Sample Project for feature request.");
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_env_falls_back_on_missing_key() {
        assert_eq!(parse_env("USER_SCHEMA_DOCS_UNSET_KEY", 42u32), 42);
    }
}
