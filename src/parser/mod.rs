//! Document parser (verb module)
//!
//! Transforms YAML registry files and JSON request bodies into model types.

use std::io::Read;
use std::path::Path;
use crate::error::ParseError;
use crate::query::ExploreRequest;
use crate::schema::SchemaRegistry;

/// Parse a registry from a YAML file
pub fn parse_registry_file<P: AsRef<Path>>(path: P) -> Result<SchemaRegistry, ParseError> {
    SchemaRegistry::from_file(path)
}

/// Parse a registry from a YAML string
pub fn parse_registry_str(yaml: &str) -> Result<SchemaRegistry, ParseError> {
    SchemaRegistry::from_yaml(yaml)
}

/// Parse an explore request from a JSON file
pub fn parse_request_file<P: AsRef<Path>>(path: P) -> Result<ExploreRequest, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_request_str(&contents)
}

/// Parse an explore request from a JSON string
pub fn parse_request_str(json: &str) -> Result<ExploreRequest, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse an explore request from any reader (e.g. stdin)
pub fn parse_request_reader<R: Read>(mut reader: R) -> Result<ExploreRequest, ParseError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_request_str(&contents)
}
