//! Error types for loading registries and requests

use crate::schema::RegistryError;

/// Errors that can occur while reading registry or request documents
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// YAML deserialization error
    #[error("Invalid YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// JSON deserialization error
    #[error("Invalid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    /// Document parsed but describes an invalid registry
    #[error("Invalid registry: {0}")]
    Registry(#[from] RegistryError),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io {
            path: String::new(),
            source: err,
        }
    }
}
