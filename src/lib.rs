//! gamesql - Compile game catalog explore requests to SQL
//!
//! This library provides:
//! - A schema registry mapping client column names to typed table columns
//! - Explore request types (filters, group-bys, aggregations)
//! - Value coercion and an operator legality table per column type
//! - Compilation of requests into a validated query
//! - SQL emission with inline escaped literals or bind parameters
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `schema/` - column registry (SchemaRegistry, ColumnDescriptor, ScalarType)
//! - `query/` - request types (ExploreRequest, FilterSpec, AggregationSpec)
//! - `plan/` - compiled query types (CompiledQuery, Expr, Literal)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → SchemaRegistry, JSON → ExploreRequest
//! - `compiler/` - SchemaRegistry + ExploreRequest → CompiledQuery
//! - `emitter/` - CompiledQuery → SQL
//!
//! # Example
//!
//! ```
//! use gamesql::{assemble, emit_sql, Dialect, ExploreRequest, FilterSpec, Operator, SchemaRegistry};
//!
//! let registry = SchemaRegistry::game_catalog();
//! let request = ExploreRequest {
//!     filters: vec![FilterSpec::new("Name", Operator::Eq, "half")],
//!     ..Default::default()
//! };
//! let query = assemble(&registry, &request)?;
//! assert_eq!(emit_sql(&query, Dialect::Postgres), "SELECT * FROM game_data WHERE name ILIKE '%half%'");
//! # Ok::<(), gamesql::CompileError>(())
//! ```

pub mod schema;
pub mod query;
pub mod plan;
pub mod compiler;
pub mod emitter;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use schema::{SchemaRegistry, ColumnDescriptor, ScalarType, RegistryError};
pub use query::{ExploreRequest, FilterSpec, AggregationSpec, Operator, AggregateFunction};
pub use plan::{CompiledQuery, SelectItem, Expr, Literal, Column};
pub use compiler::{assemble, compile_predicate, compile_aggregate, coerce, parse_date, CompileError};
pub use emitter::{emit_sql, emit_parameterized, emit_count_sql, emit_count_parameterized, Dialect, ParameterizedQuery};
pub use error::ParseError;
