//! 서비스가 제공하는 OpenAPI 문서를 표준 출력으로 내보냅니다
//!
//! ```bash
//! cargo run --bin export_openapi > openapi.json
//! DOCS_SCHEMA_SOURCE=annotated cargo run --bin export_openapi
//! ```

use dotenv::dotenv;
use user_schema_docs::config::DocsConfig;
use user_schema_docs::docs::build_openapi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let openapi = build_openapi(&DocsConfig::from_env())?;
    println!("{}", openapi.to_pretty_json()?);

    Ok(())
}
