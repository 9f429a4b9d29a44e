//! Verify update/delete build and parse against JSON vectors in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use todo_item::{ApiError, HttpMethod, HttpResponse, Todo, TodoClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check an error against `{"error": "not_found"}` or `{"error": "http", "status": N}`.
fn assert_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    match expected["error"].as_str().unwrap() {
        "not_found" => assert_eq!(err, ApiError::NotFound, "{name}: error"),
        "http" => {
            let status = expected["status"].as_u64().unwrap() as u16;
            assert!(
                matches!(err, ApiError::Http { status: s, .. } if s == status),
                "{name}: expected HTTP {status}, got {err:?}"
            );
        }
        other => panic!("{name}: unknown error kind {other}"),
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: Todo = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_update_todo(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        let expected = &case["expected_result"];
        match c.parse_update_todo(simulated(case)) {
            Ok(todo) => {
                let want: Todo = serde_json::from_value(expected["ok"].clone())
                    .unwrap_or_else(|_| panic!("{name}: expected an error, got {todo:?}"));
                assert_eq!(todo, want, "{name}: parsed result");
            }
            Err(err) => assert_error(name, err, expected),
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_delete_todo(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        let expected = &case["expected_result"];
        match c.parse_delete_todo(simulated(case)) {
            Ok(()) => assert!(expected.get("ok").is_some(), "{name}: expected an error"),
            Err(err) => assert_error(name, err, expected),
        }
    }
}
