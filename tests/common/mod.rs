//! Shared test utilities for integration tests

use gamesql::{assemble, emit_sql, parser, CompileError, Dialect, ExploreRequest, SchemaRegistry};

/// Load a registry fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> SchemaRegistry {
    let path = format!("tests/test_data/{}", name);
    parser::parse_registry_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Parse a JSON request body, panicking on malformed fixtures
pub fn request(json: &str) -> ExploreRequest {
    parser::parse_request_str(json).unwrap_or_else(|e| panic!("Bad request fixture: {}", e))
}

/// Run the full pipeline: registry + request → Postgres SQL
pub fn run_pipeline(registry: &SchemaRegistry, request: &ExploreRequest) -> Result<String, CompileError> {
    let query = assemble(registry, request)?;
    Ok(emit_sql(&query, Dialect::Postgres))
}
