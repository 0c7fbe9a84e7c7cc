//! Explore compiler (verb module)
//!
//! Transforms an ExploreRequest into a CompiledQuery using a SchemaRegistry.
//!
//! - `coerce` - raw values -> typed literals
//! - `rules` - operator/type legality table
//! - `predicate` - WHERE filters
//! - `aggregate` - aggregate select items and HAVING filters
//! - `assemble` - the whole request

mod aggregate;
mod assemble;
mod coerce;
mod error;
mod predicate;
mod rules;

pub use aggregate::{compile_aggregate, CompiledAggregate};
pub use assemble::assemble;
pub use coerce::{coerce, parse_date, CoercionError};
pub use error::CompileError;
pub use predicate::compile_predicate;
pub use rules::{predicate_shape, aggregate_result_type, PredicateShape};
