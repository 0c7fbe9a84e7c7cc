//! Operator legality table
//!
//! Which comparisons each scalar type supports and how they are written.
//! The match is exhaustive over (ScalarType, Operator), so adding a type or
//! an operator fails to compile until its row is filled in.

use crate::plan::BinaryOperator;
use crate::query::{AggregateFunction, Operator};
use crate::schema::ScalarType;

/// How a legal (type, operator) pair is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateShape {
    /// Case-insensitive substring match (String + Eq)
    Substring,
    /// Array membership (StringArray + Eq)
    Membership,
    /// `column OP literal`; literal quoting follows its coerced type
    Compare(BinaryOperator),
}

/// The legal shape for `operator` on a value of `scalar_type`, or `None`
/// when the pair is disallowed
pub fn predicate_shape(scalar_type: ScalarType, operator: Operator) -> Option<PredicateShape> {
    use ScalarType as T;

    match (scalar_type, operator) {
        (T::String, Operator::Eq) => Some(PredicateShape::Substring),
        (T::StringArray, Operator::Eq) => Some(PredicateShape::Membership),
        (T::Boolean, Operator::Eq) => Some(PredicateShape::Compare(BinaryOperator::Eq)),
        (T::String | T::StringArray | T::Boolean, Operator::Lt | Operator::Gt | Operator::Lte | Operator::Gte) => None,
        (T::Integer | T::Float | T::Date, op) => Some(PredicateShape::Compare(binary_operator(op))),
    }
}

fn binary_operator(operator: Operator) -> BinaryOperator {
    match operator {
        Operator::Eq => BinaryOperator::Eq,
        Operator::Lt => BinaryOperator::Lt,
        Operator::Gt => BinaryOperator::Gt,
        Operator::Lte => BinaryOperator::LtEq,
        Operator::Gte => BinaryOperator::GtEq,
    }
}

/// Result type of `function` applied to a column of `column_type`, or `None`
/// when the function does not apply to that type.
///
/// COUNT works on anything and yields an integer. SUM needs a number. MAX and
/// MIN need an ordered or text column and keep its type.
pub fn aggregate_result_type(function: AggregateFunction, column_type: ScalarType) -> Option<ScalarType> {
    use ScalarType as T;

    match (function, column_type) {
        (AggregateFunction::Count, _) => Some(T::Integer),
        (AggregateFunction::Sum, T::Integer | T::Float) => Some(column_type),
        (AggregateFunction::Sum, T::String | T::Boolean | T::Date | T::StringArray) => None,
        (AggregateFunction::Max | AggregateFunction::Min, T::Integer | T::Float | T::Date | T::String) => {
            Some(column_type)
        }
        (AggregateFunction::Max | AggregateFunction::Min, T::Boolean | T::StringArray) => None,
    }
}
