//! Expression types for compiled queries

use chrono::NaiveDate;
use serde::Serialize;
use crate::query::AggregateFunction;

/// A column reference. Only ever built from a registry descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Coerced literal values
///
/// Serializes untagged so bound parameters dump as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// Renders as the unquoted token `true` / `false`
    Bool(bool),
    Text(String),
    /// Renders quoted as `'YYYY-MM-DD'`
    Date(NaiveDate),
}

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
        }
    }
}

/// Scalar and predicate expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference
    Column(Column),
    /// Literal value
    Literal(Literal),
    /// FUNC(column)
    Aggregate {
        func: AggregateFunction,
        column: Column,
    },
    /// Comparison (e.g., price < 10)
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    /// Case-insensitive substring match; `needle` is the raw user text
    Contains {
        expr: Box<Expr>,
        needle: String,
    },
    /// Array membership: value = ANY(array)
    AnyOf {
        value: Literal,
        array: Box<Expr>,
    },
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Expr::Column(Column::new(name))
    }

    pub fn compare(left: Expr, op: BinaryOperator, right: Literal) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(Expr::Literal(right)),
        }
    }
}

/// An aggregate select item: FUNC(column) AS alias
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpr {
    pub func: AggregateFunction,
    pub column: Column,
    pub alias: String,
}

impl AggregateExpr {
    /// The aggregate call without its alias, for use in HAVING
    pub fn call(&self) -> Expr {
        Expr::Aggregate {
            func: self.func,
            column: self.column.clone(),
        }
    }
}
