//! Column descriptors for the catalog table

use serde::{Deserialize, Serialize};
use super::types::ScalarType;

/// A catalog column: the name clients use, the physical column it maps to,
/// and its declared scalar type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    /// Human-readable name used in requests (e.g., "Release date")
    #[serde(rename = "name")]
    pub external_name: String,
    /// Physical column name (e.g., "release_date")
    #[serde(rename = "column")]
    pub internal_name: String,
    #[serde(rename = "type")]
    pub scalar_type: ScalarType,
}

impl ColumnDescriptor {
    pub fn new(
        external_name: impl Into<String>,
        internal_name: impl Into<String>,
        scalar_type: ScalarType,
    ) -> Self {
        Self {
            external_name: external_name.into(),
            internal_name: internal_name.into(),
            scalar_type,
        }
    }
}
