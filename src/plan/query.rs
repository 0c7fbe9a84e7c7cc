//! The compiled query

use super::expr::{AggregateExpr, Column, Expr};

/// An entry of the select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// A grouped column
    Column(Column),
    /// FUNC(column) AS alias
    Aggregate(AggregateExpr),
}

/// A fully validated single-table query.
///
/// `filters` and `having` are flat conjunctions. An empty select list means
/// `SELECT *`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub table: String,
    pub select: Vec<SelectItem>,
    pub filters: Vec<Expr>,
    pub group_by: Vec<Column>,
    pub having: Vec<Expr>,
}

impl CompiledQuery {
    /// Whether the query selects every column
    pub fn selects_all(&self) -> bool {
        self.select.is_empty()
    }

    /// Whether the query aggregates
    pub fn is_aggregate(&self) -> bool {
        !self.group_by.is_empty()
    }
}
