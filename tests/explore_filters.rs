//! Integration tests for WHERE filters
//!
//! Requests are built from JSON bodies the way clients send them.

mod common;

use common::{load_fixture, request, run_pipeline};
use gamesql::{assemble, emit_parameterized, CompileError, Dialect, Literal, Operator, ScalarType};

#[test]
fn test_name_filter_is_case_insensitive_substring() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(r#"{"filters": [{"column": "Name", "operator": "eq", "value": "half"}]}"#);

    let sql = run_pipeline(&registry, &req).expect("Pipeline should succeed");

    // ILIKE '%half%' matches both "Half-Life" and "half life 2"
    assert_eq!(sql, "SELECT * FROM game_data WHERE name ILIKE '%half%'");
}

#[test]
fn test_filters_are_anded_in_request_order() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(
        r#"{"filters": [
            {"column": "Price", "operator": "lte", "value": 19.99},
            {"column": "Release date", "operator": "gt", "value": "Nov 12, 2019"},
            {"column": "Linux", "operator": "eq", "value": true},
            {"column": "Tags", "operator": "eq", "value": "Roguelike"}
        ]}"#,
    );

    let sql = run_pipeline(&registry, &req).expect("Pipeline should succeed");

    assert_eq!(
        sql,
        "SELECT * FROM game_data WHERE price <= 19.99 AND release_date > '2019-11-12' \
         AND linux = true AND 'Roguelike' = ANY(tags)"
    );
}

#[test]
fn test_ordering_operators_rejected_on_text_bool_and_arrays() {
    let registry = load_fixture("game_catalog.yaml");

    for (column, value) in [("Developers", "\"Valve\""), ("Mac", "true"), ("Genres", "\"Indie\"")] {
        for op in ["lt", "gt", "lte", "gte"] {
            let req = request(&format!(
                r#"{{"filters": [{{"column": "{column}", "operator": "{op}", "value": {value}}}]}}"#
            ));
            let err = run_pipeline(&registry, &req).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidOperator { column: ref c, .. } if c == column),
                "{column} {op}: {err:?}"
            );
        }
    }
}

#[test]
fn test_unknown_filter_column_is_named() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(r#"{"filters": [{"column": "Metascore", "operator": "gt", "value": 80}]}"#);

    let err = run_pipeline(&registry, &req).unwrap_err();
    assert_eq!(err, CompileError::UnknownColumn("Metascore".to_string()));
    assert_eq!(err.to_string(), "Unknown column 'Metascore'");
}

#[test]
fn test_bad_date_rejects_whole_request() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(
        r#"{"filters": [
            {"column": "Price", "operator": "lt", "value": 5},
            {"column": "Release date", "operator": "eq", "value": "not a date"}
        ]}"#,
    );

    match run_pipeline(&registry, &req).unwrap_err() {
        CompileError::InvalidValue { column, source } => {
            assert_eq!(column, "Release date");
            assert_eq!(source.expected, ScalarType::Date);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_partial_date_defaults_to_first_of_month() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(r#"{"filters": [{"column": "Release date", "operator": "gte", "value": "Nov 2019"}]}"#);

    let sql = run_pipeline(&registry, &req).expect("Pipeline should succeed");
    assert!(sql.ends_with("WHERE release_date >= '2019-11-01'"), "{}", sql);
}

#[test]
fn test_out_of_range_years_are_rejected() {
    let registry = load_fixture("game_catalog.yaml");

    for value in ["Nov 12, -5", "Nov 0"] {
        let req = request(&format!(
            r#"{{"filters": [{{"column": "Release date", "operator": "eq", "value": "{value}"}}]}}"#
        ));
        let err = run_pipeline(&registry, &req).unwrap_err();
        assert!(
            matches!(err, CompileError::InvalidValue { ref column, .. } if column == "Release date"),
            "{value}: {err:?}"
        );
    }
}

#[test]
fn test_nul_in_text_value_is_rejected() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(r#"{"filters": [{"column": "Name", "operator": "eq", "value": "a\u0000b"}]}"#);

    let err = run_pipeline(&registry, &req).unwrap_err();
    assert!(matches!(err, CompileError::InvalidValue { ref column, .. } if column == "Name"));
}

#[test]
fn test_injection_attempts_stay_inside_literals() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(
        r#"{"filters": [
            {"column": "Name", "operator": "eq", "value": "'; DROP TABLE game_data; --"},
            {"column": "Required age", "operator": "lt", "value": "1 OR 1=1"}
        ]}"#,
    );

    // Numbers must be numbers
    let err = run_pipeline(&registry, &req).unwrap_err();
    assert!(matches!(err, CompileError::InvalidValue { ref column, .. } if column == "Required age"));

    let req = request(
        r#"{"filters": [{"column": "Name", "operator": "eq", "value": "'; DROP TABLE game_data; --"}]}"#,
    );
    let sql = run_pipeline(&registry, &req).unwrap();
    assert_eq!(sql, "SELECT * FROM game_data WHERE name ILIKE '%''; DROP TABLE game\\_data; --%'");
}

#[test]
fn test_bound_parameters_keep_user_text_out_of_sql() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(
        r#"{"filters": [
            {"column": "Name", "operator": "eq", "value": "o'brien"},
            {"column": "Release date", "operator": "lt", "value": "Jan 2001"}
        ]}"#,
    );

    let query = assemble(&registry, &req).unwrap();
    let rendered = emit_parameterized(&query, Dialect::Postgres);

    assert_eq!(rendered.sql, "SELECT * FROM game_data WHERE name ILIKE $1 AND release_date < $2");
    assert!(!rendered.sql.contains("brien"));
    assert_eq!(rendered.params[0], Literal::Text("%o'brien%".to_string()));
    assert!(matches!(rendered.params[1], Literal::Date(_)));
}

#[test]
fn test_compilation_is_idempotent() {
    let registry = load_fixture("game_catalog.yaml");
    let req = request(
        r#"{"filters": [{"column": "Score rank", "operator": "gte", "value": 0.5}],
            "groupBys": ["Genres"],
            "aggregations": [{"column": "Positive", "function": "sum", "alias": "likes",
                              "hasPostFilter": true, "postFilterOperator": "gt", "postFilterValue": 1000}]}"#,
    );

    let first = run_pipeline(&registry, &req).unwrap();
    let second = run_pipeline(&registry, &req).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_operator_vocabulary_round_trips() {
    for op in Operator::ALL {
        let parsed: Operator = op.as_str().parse().unwrap();
        assert_eq!(parsed, op);
    }
}
