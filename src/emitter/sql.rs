//! SQL emitter
//!
//! Transforms a CompiledQuery into SQL text. Identifiers come from the
//! registry; literals are either written inline (escaped) or replaced by
//! `$n` placeholders and returned alongside the text.

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use crate::plan::{AggregateExpr, CompiledQuery, Expr, Literal, SelectItem};

/// Target SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `ILIKE` and `value = ANY(array)`
    #[default]
    Postgres,
    /// `ILIKE ... ESCAPE` and `list_contains(array, value)`
    DuckDb,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Error when parsing a dialect name
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown dialect '{input}'. Valid options: postgres, duckdb")]
pub struct ParseDialectError {
    pub input: String,
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "duckdb" | "duck" => Ok(Dialect::DuckDb),
            _ => Err(ParseDialectError { input: s.to_string() }),
        }
    }
}

/// SQL text with literals passed out-of-band. `params[i]` binds to `$i+1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterizedQuery {
    pub sql: String,
    pub params: Vec<Literal>,
}

/// Emit SQL with every literal written inline and escaped
pub fn emit_sql(query: &CompiledQuery, dialect: Dialect) -> String {
    SqlWriter::inline(dialect).query(query)
}

/// Emit SQL with `$n` placeholders and the values to bind
pub fn emit_parameterized(query: &CompiledQuery, dialect: Dialect) -> ParameterizedQuery {
    let mut writer = SqlWriter::bind(dialect);
    let sql = writer.query(query);
    ParameterizedQuery { sql, params: writer.params }
}

/// Emit the total row count of `query`, literals inline
pub fn emit_count_sql(query: &CompiledQuery, dialect: Dialect) -> String {
    wrap_count(&emit_sql(query, dialect))
}

/// Emit the total row count of `query` with bind parameters
pub fn emit_count_parameterized(query: &CompiledQuery, dialect: Dialect) -> ParameterizedQuery {
    let inner = emit_parameterized(query, dialect);
    ParameterizedQuery {
        sql: wrap_count(&inner.sql),
        params: inner.params,
    }
}

/// Emit a single expression with literals inline
pub fn emit_expr(expr: &Expr, dialect: Dialect) -> String {
    SqlWriter::inline(dialect).expr(expr)
}

fn wrap_count(inner: &str) -> String {
    format!("SELECT COUNT(*) AS total_count FROM ({inner}) AS explore")
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralMode {
    Inline,
    Bind,
}

struct SqlWriter {
    dialect: Dialect,
    mode: LiteralMode,
    params: Vec<Literal>,
}

impl SqlWriter {
    fn inline(dialect: Dialect) -> Self {
        Self { dialect, mode: LiteralMode::Inline, params: Vec::new() }
    }

    fn bind(dialect: Dialect) -> Self {
        Self { dialect, mode: LiteralMode::Bind, params: Vec::new() }
    }

    fn query(&mut self, query: &CompiledQuery) -> String {
        let select = if query.selects_all() {
            "*".to_string()
        } else {
            query.select.iter().map(select_item).collect::<Vec<_>>().join(", ")
        };

        let mut sql = format!("SELECT {select} FROM {}", query.table);

        if !query.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conjunction(&query.filters));
        }

        if !query.group_by.is_empty() {
            let cols: Vec<&str> = query.group_by.iter().map(|c| c.name.as_str()).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&cols.join(", "));
        }

        if !query.having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.conjunction(&query.having));
        }

        sql
    }

    fn conjunction(&mut self, exprs: &[Expr]) -> String {
        exprs.iter().map(|e| self.expr(e)).collect::<Vec<_>>().join(" AND ")
    }

    fn expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Column(col) => col.name.clone(),
            Expr::Literal(lit) => self.literal(lit),
            Expr::Aggregate { func, column } => format!("{}({})", func.sql_name(), column.name),
            Expr::BinaryOp { left, op, right } => {
                let l = self.expr(left);
                let r = self.expr(right);
                format!("{} {} {}", l, op.as_str(), r)
            }
            Expr::Contains { expr, needle } => {
                let target = self.expr(expr);
                let pattern = self.literal(&Literal::Text(format!("%{}%", escape_like(needle))));
                match self.dialect {
                    Dialect::Postgres => format!("{target} ILIKE {pattern}"),
                    Dialect::DuckDb => format!("{target} ILIKE {pattern} ESCAPE '\\'"),
                }
            }
            Expr::AnyOf { value, array } => {
                let needle = self.literal(value);
                let array = self.expr(array);
                match self.dialect {
                    Dialect::Postgres => format!("{needle} = ANY({array})"),
                    Dialect::DuckDb => format!("list_contains({array}, {needle})"),
                }
            }
        }
    }

    fn literal(&mut self, lit: &Literal) -> String {
        match self.mode {
            LiteralMode::Inline => inline_literal(lit),
            LiteralMode::Bind => {
                self.params.push(lit.clone());
                format!("${}", self.params.len())
            }
        }
    }
}

fn select_item(item: &SelectItem) -> String {
    match item {
        SelectItem::Column(col) => col.name.clone(),
        SelectItem::Aggregate(agg) => aggregate_item(agg),
    }
}

fn aggregate_item(agg: &AggregateExpr) -> String {
    format!("{}({}) AS {}", agg.func.sql_name(), agg.column.name, agg.alias)
}

fn inline_literal(lit: &Literal) -> String {
    match lit {
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => f.to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Text(s) => quote(s),
        Literal::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Escape LIKE metacharacters so the text matches literally
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
