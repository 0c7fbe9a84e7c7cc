//! Scalar type vocabulary for catalog columns

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declared domain of a column's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Free text, compared by case-insensitive substring
    String,
    /// Whole number
    Integer,
    /// Floating point number
    Float,
    /// true / false
    Boolean,
    /// Calendar date without time
    Date,
    /// Array of text values, compared by membership
    StringArray,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::String => write!(f, "string"),
            ScalarType::Integer => write!(f, "integer"),
            ScalarType::Float => write!(f, "float"),
            ScalarType::Boolean => write!(f, "boolean"),
            ScalarType::Date => write!(f, "date"),
            ScalarType::StringArray => write!(f, "string-array"),
        }
    }
}

/// Error when parsing a scalar type string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown scalar type '{input}'. Valid options: string, integer, float, boolean, date, string-array")]
pub struct ParseScalarTypeError {
    pub input: String,
}

impl FromStr for ScalarType {
    type Err = ParseScalarTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" | "varchar" => Ok(ScalarType::String),
            "integer" | "int" | "bigint" => Ok(ScalarType::Integer),
            "float" | "double" => Ok(ScalarType::Float),
            "boolean" | "bool" => Ok(ScalarType::Boolean),
            "date" => Ok(ScalarType::Date),
            "string-array" | "string_array" | "string[]" | "text[]" => Ok(ScalarType::StringArray),
            _ => Err(ParseScalarTypeError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ScalarType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ScalarType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
