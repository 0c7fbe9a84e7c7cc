//! Aggregation compiler: FUNC(column) AS alias, plus an optional HAVING predicate

use crate::plan::{AggregateExpr, Column, Expr};
use crate::query::AggregationSpec;
use crate::schema::{is_safe_identifier, ColumnDescriptor, SchemaRegistry};
use super::error::CompileError;
use super::predicate::build_comparison;
use super::rules::aggregate_result_type;

/// A compiled aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledAggregate {
    pub select: AggregateExpr,
    pub having: Option<Expr>,
}

/// Compile one aggregation against its resolved column.
///
/// The registry is consulted so the alias cannot shadow a catalog column.
/// The post filter is checked against the aggregate's result type, not the
/// column's: `COUNT(name) > 5` is legal even though `name > 5` is not.
pub fn compile_aggregate(
    agg: &AggregationSpec,
    descriptor: &ColumnDescriptor,
    registry: &SchemaRegistry,
) -> Result<CompiledAggregate, CompileError> {
    let result_type = aggregate_result_type(agg.function, descriptor.scalar_type).ok_or_else(|| {
        CompileError::UnsupportedAggregateFunction {
            function: agg.function,
            column: descriptor.external_name.clone(),
        }
    })?;

    validate_alias(&agg.alias, registry)?;

    let select = AggregateExpr {
        func: agg.function,
        column: Column::new(&descriptor.internal_name),
        alias: agg.alias.clone(),
    };

    let having = if agg.has_post_filter {
        let (Some(operator), Some(value)) = (agg.post_filter_operator, agg.post_filter_value.as_ref()) else {
            return Err(CompileError::IncompletePostFilter {
                alias: agg.alias.clone(),
            });
        };
        Some(build_comparison(select.call(), &agg.alias, result_type, operator, value)?)
    } else {
        None
    };

    Ok(CompiledAggregate { select, having })
}

fn validate_alias(alias: &str, registry: &SchemaRegistry) -> Result<(), CompileError> {
    let reason = if !is_safe_identifier(alias) {
        "must be a letter or underscore followed by letters, digits or underscores (max 63)"
    } else if registry.contains_name(alias) {
        "collides with a column name"
    } else {
        return Ok(());
    };
    Err(CompileError::InvalidAlias {
        alias: alias.to_string(),
        reason: reason.to_string(),
    })
}
