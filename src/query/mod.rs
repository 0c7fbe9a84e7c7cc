//! Explore request types (nouns)

mod request;
mod vocab;

pub use request::{ExploreRequest, FilterSpec, AggregationSpec};
pub use vocab::{Operator, AggregateFunction, ParseOperatorError, ParseAggregateFunctionError};
