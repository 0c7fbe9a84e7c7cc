//! SQL emitter (verb module)
//!
//! Transforms a CompiledQuery into SQL text for a target dialect.

mod sql;

pub use sql::{
    emit_sql,
    emit_parameterized,
    emit_count_sql,
    emit_count_parameterized,
    emit_expr,
    Dialect,
    ParameterizedQuery,
    ParseDialectError,
};
