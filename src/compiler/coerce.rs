//! Value coercion: raw request values -> typed literals

use chrono::NaiveDate;
use serde_json::Value;
use crate::plan::Literal;
use crate::schema::ScalarType;

/// Formats tried, in order, for textual dates. The second covers source
/// rows that only carry a month and year; the day defaults to the 1st.
const DATE_FORMAT: &str = "%b %d, %Y";
const MONTH_YEAR_FORMAT: &str = "%d %b %Y";

/// A raw value that cannot be read as the target scalar type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot read {value} as {expected}")]
pub struct CoercionError {
    /// JSON rendering of the rejected value
    pub value: String,
    pub expected: ScalarType,
}

impl CoercionError {
    fn new(value: &Value, expected: ScalarType) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}

/// Convert a raw filter or post-filter value into the literal representation
/// required by `scalar_type`.
pub fn coerce(raw: &Value, scalar_type: ScalarType) -> Result<Literal, CoercionError> {
    let literal = match scalar_type {
        ScalarType::String | ScalarType::StringArray => coerce_text(raw),
        ScalarType::Integer | ScalarType::Float => coerce_number(raw),
        ScalarType::Boolean => coerce_bool(raw),
        ScalarType::Date => match raw {
            Value::String(s) => parse_date(s).map(Literal::Date),
            _ => None,
        },
    };
    literal.ok_or_else(|| CoercionError::new(raw, scalar_type))
}

/// Parse a catalog date: "Nov 12, 2019", or "Nov 2019" (day 1).
///
/// The year must be exactly four digits, so signed or short years that the
/// database would refuse never become literals.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let text = input.trim();
    let year = text.rsplit(' ').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) || year == "0000" {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&format!("01 {text}"), MONTH_YEAR_FORMAT))
        .ok()
}

fn coerce_text(raw: &Value) -> Option<Literal> {
    match raw {
        // PostgreSQL text cannot hold NUL
        Value::String(s) if s.contains('\0') => None,
        Value::String(s) => Some(Literal::Text(s.clone())),
        Value::Number(n) => Some(Literal::Text(n.to_string())),
        Value::Bool(b) => Some(Literal::Text(b.to_string())),
        _ => None,
    }
}

fn coerce_number(raw: &Value) -> Option<Literal> {
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Literal::Int(i)),
            None => n.as_f64().filter(|f| f.is_finite()).map(Literal::Float),
        },
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Some(Literal::Int(i));
            }
            s.parse::<f64>().ok().filter(|f| f.is_finite()).map(Literal::Float)
        }
        _ => None,
    }
}

fn coerce_bool(raw: &Value) -> Option<Literal> {
    match raw {
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" => Some(Literal::Bool(true)),
            "false" => Some(Literal::Bool(false)),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(Literal::Bool(true)),
            Some(0) => Some(Literal::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_date() {
        assert_eq!(coerce(&json!("Nov 12, 2019"), ScalarType::Date).unwrap(), Literal::Date(date(2019, 11, 12)));
    }

    #[test]
    fn test_month_year_defaults_to_first() {
        assert_eq!(coerce(&json!("Nov 2019"), ScalarType::Date).unwrap(), Literal::Date(date(2019, 11, 1)));
        assert_eq!(parse_date("  Feb 2021 "), Some(date(2021, 2, 1)));
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let err = coerce(&json!("not a date"), ScalarType::Date).unwrap_err();
        assert_eq!(err.expected, ScalarType::Date);
        assert_eq!(err.value, "\"not a date\"");

        assert!(coerce(&json!("2019-11-12"), ScalarType::Date).is_err());
        assert!(coerce(&json!("Feb 30, 2020"), ScalarType::Date).is_err());
        assert!(coerce(&json!(20191112), ScalarType::Date).is_err());
    }

    #[test]
    fn test_date_year_must_have_four_digits() {
        assert_eq!(parse_date("Nov 12, -5"), None);
        assert_eq!(parse_date("Nov 0"), None);
        assert_eq!(parse_date("Nov 12, 0000"), None);
        assert_eq!(parse_date("Nov 12, 19"), None);
        assert_eq!(parse_date("Nov 12, +2019"), None);
        assert_eq!(parse_date("Nov 12, 12019"), None);
        assert_eq!(parse_date("Jan 0001"), Some(date(1, 1, 1)));
        assert!(coerce(&json!("Nov 12, -5"), ScalarType::Date).is_err());
    }

    #[test]
    fn test_bool_normalization() {
        assert_eq!(coerce(&json!(true), ScalarType::Boolean).unwrap(), Literal::Bool(true));
        assert_eq!(coerce(&json!("FALSE"), ScalarType::Boolean).unwrap(), Literal::Bool(false));
        assert_eq!(coerce(&json!(1), ScalarType::Boolean).unwrap(), Literal::Bool(true));
        assert!(coerce(&json!("yes please"), ScalarType::Boolean).is_err());
        assert!(coerce(&json!(2), ScalarType::Boolean).is_err());
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(coerce(&json!(42), ScalarType::Integer).unwrap(), Literal::Int(42));
        assert_eq!(coerce(&json!(9.99), ScalarType::Float).unwrap(), Literal::Float(9.99));
        assert_eq!(coerce(&json!(" 18 "), ScalarType::Integer).unwrap(), Literal::Int(18));
        assert_eq!(coerce(&json!("4.5"), ScalarType::Float).unwrap(), Literal::Float(4.5));
    }

    #[test]
    fn test_non_numeric_text_is_rejected_for_numbers() {
        assert!(coerce(&json!("5; DROP TABLE game_data"), ScalarType::Integer).is_err());
        assert!(coerce(&json!("NaN"), ScalarType::Float).is_err());
        assert!(coerce(&json!("inf"), ScalarType::Float).is_err());
        assert!(coerce(&json!(true), ScalarType::Integer).is_err());
    }

    #[test]
    fn test_text_pass_through() {
        assert_eq!(coerce(&json!("Half-Life"), ScalarType::String).unwrap(), Literal::Text("Half-Life".into()));
        assert_eq!(coerce(&json!(2), ScalarType::StringArray).unwrap(), Literal::Text("2".into()));
    }

    #[test]
    fn test_text_with_nul_is_rejected() {
        assert!(coerce(&json!("a\u{0}b"), ScalarType::String).is_err());
        assert!(coerce(&json!("RPG\u{0}"), ScalarType::StringArray).is_err());
    }

    #[test]
    fn test_structured_values_are_rejected() {
        for ty in [ScalarType::String, ScalarType::Integer, ScalarType::Boolean, ScalarType::StringArray] {
            assert!(coerce(&Value::Null, ty).is_err());
            assert!(coerce(&json!(["a"]), ty).is_err());
            assert!(coerce(&json!({"a": 1}), ty).is_err());
        }
    }
}
