//! Compiler errors

use crate::query::{AggregateFunction, Operator};
use crate::schema::UnknownColumn;
use super::coerce::CoercionError;

/// Reasons an explore request is rejected.
///
/// Every variant names the offending column, operator or alias. None of them
/// are transient: retrying the same request fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Operator '{operator}' is not allowed on column '{column}'")]
    InvalidOperator { column: String, operator: Operator },

    #[error("Invalid value for column '{column}': {source}")]
    InvalidValue {
        column: String,
        source: CoercionError,
    },

    #[error("Group by and aggregations must be used together (got {group_bys} group by column(s) and {aggregations} aggregation(s))")]
    AggregationGroupByMismatch { group_bys: usize, aggregations: usize },

    #[error("Aggregate function '{function}' is not supported on column '{column}'")]
    UnsupportedAggregateFunction {
        function: AggregateFunction,
        column: String,
    },

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Aggregation '{alias}' has a post filter without an operator and value")]
    IncompletePostFilter { alias: String },
}

impl From<UnknownColumn> for CompileError {
    fn from(err: UnknownColumn) -> Self {
        CompileError::UnknownColumn(err.0)
    }
}
