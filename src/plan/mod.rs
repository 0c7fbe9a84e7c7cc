//! Compiled query types (noun module)
//!
//! A validated, single-table query that the emitter turns into SQL.

mod expr;
mod query;

pub use expr::{Expr, AggregateExpr, Column, Literal, BinaryOperator};
pub use query::{CompiledQuery, SelectItem};
