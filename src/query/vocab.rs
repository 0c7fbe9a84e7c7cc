//! Wire vocabularies: comparison operators and aggregate functions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Operator
// ============================================================================

/// Comparison operator accepted in filters and post-aggregation filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl Operator {
    pub const ALL: [Operator; 5] = [Operator::Eq, Operator::Lt, Operator::Gt, Operator::Lte, Operator::Gte];

    /// Wire token (`eq`, `lt`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Lte => "lte",
            Operator::Gte => "gte",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an operator string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown operator '{input}'. Valid options: eq, lt, gt, lte, gte")]
pub struct ParseOperatorError {
    pub input: String,
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eq" => Ok(Operator::Eq),
            "lt" => Ok(Operator::Lt),
            "gt" => Ok(Operator::Gt),
            "lte" => Ok(Operator::Lte),
            "gte" => Ok(Operator::Gte),
            _ => Err(ParseOperatorError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// AggregateFunction
// ============================================================================

/// Aggregate functions available to explore requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Count,
    Sum,
    Max,
    Min,
}

impl AggregateFunction {
    /// Wire token (`count`, `sum`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Max => "max",
            AggregateFunction::Min => "min",
        }
    }

    /// SQL function name
    pub fn sql_name(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "COUNT",
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Max => "MAX",
            AggregateFunction::Min => "MIN",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an aggregate function string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unsupported aggregate function '{input}'. Valid options: count, sum, max, min")]
pub struct ParseAggregateFunctionError {
    pub input: String,
}

impl FromStr for AggregateFunction {
    type Err = ParseAggregateFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(AggregateFunction::Count),
            "sum" => Ok(AggregateFunction::Sum),
            "max" => Ok(AggregateFunction::Max),
            "min" => Ok(AggregateFunction::Min),
            _ => Err(ParseAggregateFunctionError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for AggregateFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AggregateFunction::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AggregateFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
