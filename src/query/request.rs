use serde::{Deserialize, Serialize};
use super::vocab::{AggregateFunction, Operator};

/// A single `column OP value` filter
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilterSpec {
    /// External column name
    pub column: String,
    #[serde(alias = "condition")]
    pub operator: Operator,
    /// Untyped scalar; coerced against the column's declared type
    pub value: serde_json::Value,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<serde_json::Value>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

/// An aggregate over one column, optionally filtered after aggregation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationSpec {
    pub column: String,
    pub function: AggregateFunction,
    pub alias: String,
    #[serde(default, alias = "filter")]
    pub has_post_filter: bool,
    #[serde(default, alias = "filterCondition")]
    pub post_filter_operator: Option<Operator>,
    #[serde(default, alias = "filterCriteria")]
    pub post_filter_value: Option<serde_json::Value>,
}

impl AggregationSpec {
    pub fn new(column: impl Into<String>, function: AggregateFunction, alias: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            function,
            alias: alias.into(),
            has_post_filter: false,
            post_filter_operator: None,
            post_filter_value: None,
        }
    }

    /// Attach a post-aggregation (HAVING) filter
    pub fn having(mut self, operator: Operator, value: impl Into<serde_json::Value>) -> Self {
        self.has_post_filter = true;
        self.post_filter_operator = Some(operator);
        self.post_filter_value = Some(value.into());
        self
    }
}

/// Request body for explore queries
///
/// Filters are ANDed together. Group-bys and aggregations must be supplied
/// together: either both empty or both non-empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreRequest {
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default, alias = "group_bys")]
    pub group_bys: Vec<String>,
    #[serde(default)]
    pub aggregations: Vec<AggregationSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case() {
        let request: ExploreRequest = serde_json::from_value(json!({
            "filters": [{"column": "Price", "operator": "lt", "value": 10}],
            "groupBys": ["Developers"],
            "aggregations": [{
                "column": "AppId",
                "function": "count",
                "alias": "cnt",
                "hasPostFilter": true,
                "postFilterOperator": "gt",
                "postFilterValue": 5
            }]
        }))
        .unwrap();

        assert_eq!(request.filters, vec![FilterSpec::new("Price", Operator::Lt, 10)]);
        assert_eq!(request.group_bys, vec!["Developers".to_string()]);
        assert_eq!(
            request.aggregations,
            vec![AggregationSpec::new("AppId", AggregateFunction::Count, "cnt").having(Operator::Gt, 5)]
        );
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let request: ExploreRequest = serde_json::from_value(json!({
            "filters": [{"column": "Windows", "condition": "eq", "value": true}],
            "group_bys": ["Genres"],
            "aggregations": [{
                "column": "Price",
                "function": "sum",
                "alias": "total",
                "filter": true,
                "filterCondition": "gte",
                "filterCriteria": 100
            }]
        }))
        .unwrap();

        assert_eq!(request.filters[0].operator, Operator::Eq);
        assert_eq!(request.group_bys, vec!["Genres".to_string()]);
        let agg = &request.aggregations[0];
        assert!(agg.has_post_filter);
        assert_eq!(agg.post_filter_operator, Some(Operator::Gte));
        assert_eq!(agg.post_filter_value, Some(json!(100)));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let request: ExploreRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, ExploreRequest::default());
    }

    #[test]
    fn test_unknown_function_is_rejected() {
        let result = serde_json::from_value::<ExploreRequest>(json!({
            "groupBys": ["Genres"],
            "aggregations": [{"column": "Price", "function": "median", "alias": "m"}]
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("median"), "{}", err);
    }
}
