//! The schema registry: the only source of column identifiers in compiled SQL

use std::collections::HashMap;
use std::path::Path;
use serde::Deserialize;
use super::column::ColumnDescriptor;
use super::types::ScalarType;
use crate::error::ParseError;

/// Longest identifier PostgreSQL keeps without truncation
pub(crate) const MAX_IDENTIFIER_LEN: usize = 63;

/// Errors raised while constructing a registry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry for table '{table}' has no columns")]
    EmptyRegistry { table: String },
    #[error("Column '{name}' is declared more than once")]
    DuplicateColumn { name: String },
    #[error("'{name}' is not a safe SQL identifier")]
    InvalidIdentifier { name: String },
}

/// Lookup failure for a client-supplied column name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column '{0}'")]
pub struct UnknownColumn(pub String);

/// On-disk shape of a registry file
#[derive(Debug, Deserialize)]
struct RegistryDef {
    table: String,
    columns: Vec<ColumnDescriptor>,
}

/// Immutable mapping from external column names to column descriptors.
///
/// Descriptors live in an arena in declaration order; the name index points
/// into it. The registry is read-only after construction and can be shared
/// across request handlers without synchronization.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    table: String,
    columns: Vec<ColumnDescriptor>,
    by_name: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build a registry, validating names.
    ///
    /// External names must be unique. Internal names and the table name must be
    /// unique, safe SQL identifiers since they are written into queries verbatim.
    pub fn new(table: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Result<Self, RegistryError> {
        let table = table.into();
        if !is_safe_identifier(&table) {
            return Err(RegistryError::InvalidIdentifier { name: table });
        }
        if columns.is_empty() {
            return Err(RegistryError::EmptyRegistry { table });
        }

        let mut by_name = HashMap::with_capacity(columns.len());
        let mut internal_names = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if !is_safe_identifier(&column.internal_name) {
                return Err(RegistryError::InvalidIdentifier {
                    name: column.internal_name.clone(),
                });
            }
            if by_name.insert(column.external_name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateColumn {
                    name: column.external_name.clone(),
                });
            }
            if internal_names.insert(column.internal_name.to_lowercase(), idx).is_some() {
                return Err(RegistryError::DuplicateColumn {
                    name: column.internal_name.clone(),
                });
            }
        }

        Ok(Self { table, columns, by_name })
    }

    /// The built-in game catalog registry (table `game_data`)
    pub fn game_catalog() -> Self {
        use ScalarType as T;

        let columns = [
            ("AppId", "app_id", T::Integer),
            ("Name", "name", T::String),
            ("Release date", "release_date", T::Date),
            ("Required age", "required_age", T::Integer),
            ("Price", "price", T::Float),
            ("DLC count", "dlc_count", T::Integer),
            ("About the game", "about_the_game", T::String),
            ("Supported languages", "supported_languages", T::StringArray),
            ("Windows", "windows", T::Boolean),
            ("Mac", "mac", T::Boolean),
            ("Linux", "linux", T::Boolean),
            ("Positive", "positive_reviews", T::Integer),
            ("Negative", "negative_reviews", T::Integer),
            ("Score rank", "score_rank", T::Float),
            ("Developers", "developers", T::String),
            ("Publishers", "publishers", T::String),
            ("Categories", "categories", T::StringArray),
            ("Genres", "genres", T::StringArray),
            ("Tags", "tags", T::StringArray),
        ]
        .into_iter()
        .map(|(external, internal, ty)| ColumnDescriptor::new(external, internal, ty))
        .collect();

        // The literal table above is valid by construction
        Self::new("game_data", columns).unwrap_or_else(|e| unreachable!("built-in registry: {e}"))
    }

    /// Load a registry from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
            path: path_str,
            source: e,
        })?;
        Self::from_yaml(&contents)
    }

    /// Load a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let def: RegistryDef = serde_yaml::from_str(yaml)?;
        Ok(Self::new(def.table, def.columns)?)
    }

    /// Physical table the registry describes
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Look up a column by its external name
    pub fn get_column(&self, external_name: &str) -> Option<&ColumnDescriptor> {
        self.by_name.get(external_name).map(|&idx| &self.columns[idx])
    }

    /// Look up a column by its external name, failing with the offending name
    pub fn resolve(&self, external_name: &str) -> Result<&ColumnDescriptor, UnknownColumn> {
        self.get_column(external_name)
            .ok_or_else(|| UnknownColumn(external_name.to_string()))
    }

    /// Whether `name` matches any external or internal column name, ignoring case
    pub fn contains_name(&self, name: &str) -> bool {
        self.columns.iter().any(|c| {
            c.external_name.eq_ignore_ascii_case(name) || c.internal_name.eq_ignore_ascii_case(name)
        })
    }

    /// All descriptors in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, no longer than [`MAX_IDENTIFIER_LEN`]
pub(crate) fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_IDENTIFIER_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
