//! End-to-end dispatch over a plain diagnostics component.
//!
//! The component is an ordinary struct — no framework base type — whose
//! overload families exercise the whole selection space: typed pairs, an
//! object triple, catch-alls, and coverage-only disambiguation.

use std::sync::Arc;

use finer::{CandidateSignature, ParameterDescriptor, TypeTag};
use finer_http::{ComponentService, HttpRequest, ServiceError};
use serde_json::json;

/// A plain object exposed as an HTTP action set.
struct Diagnostics;

impl Diagnostics {
    fn parameters_ss(&self, a: &str, b: &str) -> serde_json::Value {
        json!([a, b])
    }

    fn parameters_si(&self, a: &str, b: i64) -> serde_json::Value {
        json!([a, b])
    }

    fn parameters_ooo(&self, a: &str, b: &str, c: &str) -> serde_json::Value {
        json!([a, b, c])
    }

    fn parameters_rest(&self, values: Vec<&str>) -> serde_json::Value {
        json!(values)
    }

    fn parameter_count(&self, n: usize) -> serde_json::Value {
        json!(n)
    }
}

fn sig(action: &str, params: Vec<ParameterDescriptor>) -> CandidateSignature {
    CandidateSignature::new(action, params).unwrap()
}

fn all_values(request: &HttpRequest) -> Vec<&str> {
    request
        .route_values()
        .iter()
        .chain(request.query())
        .chain(request.form())
        .map(|(_, v)| v.as_str())
        .collect()
}

fn diagnostics_service() -> ComponentService {
    let component = Arc::new(Diagnostics);
    let service = ComponentService::new();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameters",
                vec![
                    ParameterDescriptor::required("a", TypeTag::String),
                    ParameterDescriptor::required("b", TypeTag::String),
                ],
            ),
            move |request: &HttpRequest| {
                c.parameters_ss(request.value("a").unwrap(), request.value("b").unwrap())
            },
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameters",
                vec![
                    ParameterDescriptor::required("a", TypeTag::String),
                    ParameterDescriptor::required("b", TypeTag::Int),
                ],
            ),
            move |request: &HttpRequest| {
                c.parameters_si(
                    request.value("a").unwrap(),
                    request.value("b").unwrap().parse().unwrap(),
                )
            },
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameters",
                vec![
                    ParameterDescriptor::required("a", TypeTag::Object),
                    ParameterDescriptor::required("b", TypeTag::Object),
                    ParameterDescriptor::required("c", TypeTag::Object),
                ],
            ),
            move |request: &HttpRequest| {
                c.parameters_ooo(
                    request.value("a").unwrap(),
                    request.value("b").unwrap(),
                    request.value("c").unwrap(),
                )
            },
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameters",
                vec![ParameterDescriptor::variadic("args", TypeTag::Object)],
            ),
            move |request: &HttpRequest| c.parameters_rest(all_values(request)),
        )
        .unwrap();

    // get_parameter_count: arities 1/2/3 plus a catch-all, distinguished by
    // coverage alone.
    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameter_count",
                vec![ParameterDescriptor::required("a", TypeTag::String)],
            ),
            move |_: &HttpRequest| c.parameter_count(1),
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameter_count",
                vec![
                    ParameterDescriptor::required("a", TypeTag::String),
                    ParameterDescriptor::required("b", TypeTag::String),
                ],
            ),
            move |_: &HttpRequest| c.parameter_count(2),
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameter_count",
                vec![
                    ParameterDescriptor::required("a", TypeTag::Object),
                    ParameterDescriptor::required("b", TypeTag::Object),
                    ParameterDescriptor::required("c", TypeTag::Object),
                ],
            ),
            move |_: &HttpRequest| c.parameter_count(3),
        )
        .unwrap();

    let c = Arc::clone(&component);
    service
        .operation(
            sig(
                "get_parameter_count",
                vec![ParameterDescriptor::variadic("args", TypeTag::Object)],
            ),
            move |request: &HttpRequest| c.parameter_count(all_values(request).len()),
        )
        .unwrap();

    service
}

fn get(path: &str, pairs: &[(&str, &str)]) -> HttpRequest {
    pairs
        .iter()
        .fold(HttpRequest::builder("GET", path), |b, (k, v)| b.query(*k, *v))
        .build()
}

#[test]
fn two_strings_dispatch_to_the_string_pair() {
    let service = diagnostics_service();
    let request = get("/diagnostics/get_parameters", &[("a", "x"), ("b", "y")]);

    assert_eq!(service.dispatch(&request).unwrap(), json!(["x", "y"]));
}

#[test]
fn string_and_int_dispatch_to_the_mixed_pair() {
    let service = diagnostics_service();
    let request = get("/diagnostics/get_parameters", &[("a", "x"), ("b", "5")]);

    assert_eq!(service.dispatch(&request).unwrap(), json!(["x", 5]));
}

#[test]
fn three_ints_dispatch_to_the_object_triple() {
    let service = diagnostics_service();
    let request = get(
        "/diagnostics/get_parameters",
        &[("a", "1"), ("b", "2"), ("c", "3")],
    );

    assert_eq!(service.dispatch(&request).unwrap(), json!(["1", "2", "3"]));
}

#[test]
fn no_values_fall_through_to_the_catch_all() {
    let service = diagnostics_service();
    let request = get("/diagnostics/get_parameters", &[]);

    assert_eq!(service.dispatch(&request).unwrap(), json!([]));
}

#[test]
fn parameter_count_reflects_the_selected_arity() {
    let service = diagnostics_service();

    let one = get("/diagnostics/get_parameter_count", &[("a", "x")]);
    assert_eq!(service.dispatch(&one).unwrap(), json!(1));

    let two = get("/diagnostics/get_parameter_count", &[("a", "x"), ("b", "y")]);
    assert_eq!(service.dispatch(&two).unwrap(), json!(2));

    let three = get(
        "/diagnostics/get_parameter_count",
        &[("a", "1"), ("b", "2"), ("c", "3")],
    );
    assert_eq!(service.dispatch(&three).unwrap(), json!(3));

    // A fourth value is simply unbound; the triple still wins.
    let four = get(
        "/diagnostics/get_parameter_count",
        &[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")],
    );
    assert_eq!(service.dispatch(&four).unwrap(), json!(3));

    // Names no fixed overload binds leave only the catch-all, which counts
    // whatever arrived.
    let other = get("/diagnostics/get_parameter_count", &[("x", "1"), ("y", "2")]);
    assert_eq!(service.dispatch(&other).unwrap(), json!(2));
}

#[test]
fn unknown_action_maps_to_not_found() {
    let service = diagnostics_service();
    let request = get("/diagnostics/nonexistent", &[("a", "x")]);

    let err = service.dispatch(&request).unwrap_err();
    assert_eq!(err.status(), 404);
    assert!(matches!(err, ServiceError::UnknownAction { .. }));
}

#[test]
fn route_values_participate_like_query_values() {
    let service = diagnostics_service();
    let request = HttpRequest::builder("GET", "/diagnostics/get_parameters")
        .route_value("a", "x")
        .query("b", "7")
        .build();

    assert_eq!(service.dispatch(&request).unwrap(), json!(["x", 7]));
}
