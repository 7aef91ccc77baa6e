use std::io::Read;

use graphql_expect::{
    EnvelopeViolation, Equality, ErrorRecord, Failure, GraphQLResponse, HttpResponse, Location,
    PathSegment, ReasonPhrase, ReplayBody, ResponseError, respond,
};
use http::{StatusCode, header::CONTENT_TYPE};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};
use speculoos::prelude::*;

use crate::{expect, expect_with};

fn error_body(message: &str) -> Value {
    json!([{
        "message": message,
        "locations": [{"line": 6, "column": 7}],
        "path": ["foo"]
    }])
}

#[test]
fn asserts_response_data() {
    let expect = expect();
    let mut response = respond::json(&json!({"data": {"foo": true}})).unwrap();
    expect
        .response(&mut response)
        .is_graphql_response()
        .unwrap()
        .has_data(&json!({"foo": true}))
        .unwrap()
        .not()
        .has_data(&json!({"foo": false}))
        .unwrap();

    let mut html = respond::html("<p>Hello, World!</p>").unwrap();
    expect.response(&mut html).not().is_graphql_response().unwrap();
}

#[test]
fn asserts_response_errors() {
    let mut response = respond::json(&json!({"errors": error_body("asdf")})).unwrap();
    expect()
        .response(&mut response)
        .is_graphql_response()
        .unwrap()
        .has_errors(&error_body("asdf"))
        .unwrap()
        .not()
        .has_errors(&error_body("qwerty"))
        .unwrap();
}

#[test]
fn error_records_ignore_key_order() {
    let mut response = respond::json(&json!({
        "errors": [{"path": ["foo"], "message": "asdf", "locations": [{"column": 7, "line": 6}]}]
    }))
    .unwrap();
    let expected = [ErrorRecord {
        message: "asdf".to_string(),
        locations: Some(vec![Location { line: 6, column: 7 }]),
        path: Some(vec![PathSegment::Key("foo".to_string())]),
        extensions: None,
    }];
    expect()
        .response(&mut response)
        .has_errors(&expected)
        .unwrap();
}

#[test]
fn path_checks() {
    let expect = expect();

    let mut empty = respond::json(&json!({"data": {"foo": []}})).unwrap();
    expect.response(&mut empty).has_path("foo").unwrap();

    let mut nested = respond::json(&json!({"data": {"jah": {"ith": {"ber": "enigma"}}}})).unwrap();
    expect
        .response(&mut nested)
        .has_path_value("jah.ith.ber", "enigma")
        .unwrap()
        .not()
        .has_path("foo.bar.baz")
        .unwrap()
        .not()
        .has_path_value("jah.ith.ber", "ligma")
        .unwrap();
}

#[test]
fn path_failures_are_typed() {
    let expect = expect();
    let mut response = respond::json(&json!({"data": {"a": {"b": {"c": "x"}}}})).unwrap();

    let missing = expect.response(&mut response).has_path("a.b.z").unwrap_err();
    assert_that!(missing).matches(|err| {
        matches!(err, Failure::Response(ResponseError::PathNotFound { path }) if path == "data.a.b.z")
    });

    let mismatch = expect
        .response(&mut response)
        .has_path_value("a.b.c", "y")
        .unwrap_err();
    match mismatch {
        Failure::Response(ResponseError::PathValueMismatch {
            path,
            expected,
            actual,
        }) => {
            assert_eq!(path, "data.a.b.c");
            assert_eq!(expected, json!("y"));
            assert_eq!(actual, json!("x"));
        }
        other => panic!("unexpected failure: {other}"),
    }
}

#[test]
fn repeated_assertions_see_the_whole_body() {
    let expect = expect();
    let mut response = respond::json(&json!({"data": {"foo": false}})).unwrap();

    expect
        .response(&mut response)
        .has_data(&json!({"foo": false}))
        .unwrap()
        .has_data(&json!({"foo": false}))
        .unwrap();

    let mut body = String::new();
    response.body_mut().read_to_string(&mut body).unwrap();
    assert_eq!(body, r#"{"data":{"foo":false}}"#);
}

fn raw(status: StatusCode, content_type: &str, body: &'static str) -> HttpResponse {
    http::Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .body(ReplayBody::from(body))
        .unwrap()
}

#[rstest]
#[case::html(raw(StatusCode::OK, "text/html", r#"{"data":{}}"#))]
#[case::created(raw(StatusCode::CREATED, "application/json", r#"{"data":{}}"#))]
#[case::three_keys(raw(StatusCode::OK, "application/json", r#"{"data":{},"errors":[],"extensions":{}}"#))]
#[case::not_json(raw(StatusCode::OK, "application/json", "<p>nope</p>"))]
fn rejects_non_graphql_responses(#[case] mut response: HttpResponse) {
    let result = expect().response(&mut response).is_graphql_response();
    assert_that!(result)
        .is_err()
        .matches(|err| matches!(err, Failure::Response(err) if err.is_envelope()));
}

#[test]
fn reports_which_envelope_check_failed() {
    let mut response = respond::json(&json!({"data": {}})).unwrap();
    response
        .extensions_mut()
        .insert(ReasonPhrase("All Good".to_string()));
    let err = expect()
        .response(&mut response)
        .is_graphql_response()
        .unwrap_err();
    assert_that!(err).matches(|err| {
        matches!(
            err,
            Failure::Response(ResponseError::Envelope(EnvelopeViolation::ReasonPhrase(_)))
        )
    });
}

#[test]
fn canonical_equality_coerces_and_strict_does_not() {
    let body = json!({"data": {"count": 3, "id": 42}});

    let mut response = respond::json(&body).unwrap();
    expect()
        .response(&mut response)
        .has_data(&json!({"id": "42", "count": 3.0}))
        .unwrap();

    let strict = expect_with(false, Equality::Strict);
    strict
        .response(&mut response)
        .not()
        .has_data(&json!({"id": "42", "count": 3.0}))
        .unwrap()
        .has_data(&json!({"id": 42, "count": 3}))
        .unwrap();
}

#[derive(Debug, Deserialize, PartialEq)]
struct FooData {
    foo: bool,
}

#[test]
fn decodes_typed_payloads_after_assertions() {
    let mut response = respond::json(&json!({"data": {"foo": true}})).unwrap();
    let mut chain = expect().response(&mut response).has_data(&json!({"foo": true})).unwrap();
    let decoded: GraphQLResponse<FooData> = chain.decode().unwrap();
    assert_eq!(decoded.data, Some(FooData { foo: true }));
}

#[test]
fn serializable_structs_are_valid_expectations() {
    #[derive(serde::Serialize)]
    struct Expected {
        foo: bool,
    }

    let mut response = respond::json(&json!({"data": {"foo": true}})).unwrap();
    expect()
        .response(&mut response)
        .has_data(&Expected { foo: true })
        .unwrap();
}
