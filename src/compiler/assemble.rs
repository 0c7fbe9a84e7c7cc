//! Query assembler: a whole explore request -> CompiledQuery

use std::collections::HashSet;
use tracing::debug;
use crate::plan::{Column, CompiledQuery, SelectItem};
use crate::query::ExploreRequest;
use crate::schema::SchemaRegistry;
use super::aggregate::compile_aggregate;
use super::error::CompileError;
use super::predicate::compile_predicate;

/// Compile an explore request against a registry.
///
/// Steps:
/// 1. Check that group-bys and aggregations are both present or both absent
/// 2. Resolve group-by columns
/// 3. Compile filters into the WHERE conjunction
/// 4. Compile aggregations into select items and the HAVING conjunction
///
/// The select list is the group-by columns followed by the aggregates, or
/// empty (`SELECT *`) for a plain filtered scan. Any failure aborts before a
/// query is produced.
pub fn assemble(registry: &SchemaRegistry, request: &ExploreRequest) -> Result<CompiledQuery, CompileError> {
    let result = assemble_inner(registry, request);
    match &result {
        Ok(query) => debug!(
            table = %query.table,
            filters = query.filters.len(),
            aggregate = query.is_aggregate(),
            group_by = query.group_by.len(),
            having = query.having.len(),
            "compiled explore request"
        ),
        Err(err) => debug!(error = %err, "rejected explore request"),
    }
    result
}

fn assemble_inner(registry: &SchemaRegistry, request: &ExploreRequest) -> Result<CompiledQuery, CompileError> {
    // 1. Pairing invariant
    if request.group_bys.is_empty() != request.aggregations.is_empty() {
        return Err(CompileError::AggregationGroupByMismatch {
            group_bys: request.group_bys.len(),
            aggregations: request.aggregations.len(),
        });
    }

    // 2. Group-by columns
    let group_by = request
        .group_bys
        .iter()
        .map(|name| -> Result<Column, CompileError> {
            let descriptor = registry.resolve(name)?;
            Ok(Column::new(&descriptor.internal_name))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // 3. Filters
    let filters = request
        .filters
        .iter()
        .map(|filter| -> Result<_, CompileError> {
            let descriptor = registry.resolve(&filter.column)?;
            compile_predicate(filter, descriptor)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // 4. Aggregations
    let mut select: Vec<SelectItem> = group_by.iter().cloned().map(SelectItem::Column).collect();
    let mut having = Vec::new();
    let mut aliases = HashSet::new();
    for agg in &request.aggregations {
        let descriptor = registry.resolve(&agg.column)?;
        let compiled = compile_aggregate(agg, descriptor, registry)?;
        if !aliases.insert(agg.alias.to_lowercase()) {
            return Err(CompileError::InvalidAlias {
                alias: agg.alias.clone(),
                reason: "used by more than one aggregation".to_string(),
            });
        }
        select.push(SelectItem::Aggregate(compiled.select));
        having.extend(compiled.having);
    }

    Ok(CompiledQuery {
        table: registry.table().to_string(),
        select,
        filters,
        group_by,
        having,
    })
}
