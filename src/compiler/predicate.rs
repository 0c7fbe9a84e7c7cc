//! Predicate compiler: (column, operator, value) -> comparison expression

use serde_json::Value;
use crate::plan::{Expr, Literal};
use crate::query::{FilterSpec, Operator};
use crate::schema::{ColumnDescriptor, ScalarType};
use super::coerce::coerce;
use super::error::CompileError;
use super::rules::{predicate_shape, PredicateShape};

/// Compile one filter against its resolved column
pub fn compile_predicate(filter: &FilterSpec, descriptor: &ColumnDescriptor) -> Result<Expr, CompileError> {
    build_comparison(
        Expr::column(&descriptor.internal_name),
        &descriptor.external_name,
        descriptor.scalar_type,
        filter.operator,
        &filter.value,
    )
}

/// Build `target OP value` for a target of `scalar_type`.
///
/// Shared by WHERE filters (target is a column) and HAVING filters (target is
/// an aggregate call). `name` is what errors report. Legality is checked
/// before the value is touched.
pub(crate) fn build_comparison(
    target: Expr,
    name: &str,
    scalar_type: ScalarType,
    operator: Operator,
    raw: &Value,
) -> Result<Expr, CompileError> {
    let shape = predicate_shape(scalar_type, operator).ok_or_else(|| CompileError::InvalidOperator {
        column: name.to_string(),
        operator,
    })?;

    let value = coerce(raw, scalar_type).map_err(|source| CompileError::InvalidValue {
        column: name.to_string(),
        source,
    })?;

    let expr = match shape {
        PredicateShape::Substring => Expr::Contains {
            expr: Box::new(target),
            needle: text_of(value),
        },
        PredicateShape::Membership => Expr::AnyOf {
            value,
            array: Box::new(target),
        },
        PredicateShape::Compare(op) => Expr::compare(target, op, value),
    };
    Ok(expr)
}

fn text_of(value: Literal) -> String {
    match value {
        Literal::Text(s) => s,
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => f.to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Date(d) => d.format("%Y-%m-%d").to_string(),
    }
}
