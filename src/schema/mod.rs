//! Schema registry types (nouns)
//!
//! The fixed set of catalog columns a request may reference.

mod column;
mod registry;
mod types;

pub use column::ColumnDescriptor;
pub use registry::{SchemaRegistry, RegistryError, UnknownColumn};
pub(crate) use registry::is_safe_identifier;
pub use types::{ScalarType, ParseScalarTypeError};
