mod common;

use axum::http::StatusCode;
use common::{memory_router, send};
use serde_json::json;

#[tokio::test]
async fn root_returns_plain_greeting() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Hello, supplier service!"));
}

#[tokio::test]
async fn create_then_list_includes_name_once() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "POST", "/supplier", Some(r#"{"name":"Acme"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "Acme" }));

    let (status, body) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body.as_array().unwrap().iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(names.iter().filter(|n| **n == "Acme").count(), 1);
    assert_eq!(body, json!([{ "id": 1, "name": "Acme" }]));
}

#[tokio::test]
async fn create_with_empty_name_is_bad_request() {
    let (store, app) = memory_router();
    for payload in [r#"{"name":""}"#, r#"{"name":"","extra":true}"#, r#"{}"#] {
        let (status, body) = send(&app, "POST", "/supplier", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({ "message": "Name is required" }));
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "POST", "/supplier", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Cannot parse JSON" }));

    let (status, _) = send(&app, "POST", "/supplier", Some(r#"{"name": 5}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt as _;

    let (_, app) = memory_router();
    let req = Request::builder()
        .method("POST")
        .uri("/supplier")
        .body(Body::from(r#"{"name":"Acme"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_of_empty_table_is_empty_array() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn trailing_slash_routes_to_collection() {
    let (_, app) = memory_router();
    let (status, _) = send(&app, "POST", "/supplier/", Some(r#"{"name":"Acme"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "GET", "/supplier/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_by_id_returns_record() {
    let (_, app) = memory_router();
    send(&app, "POST", "/supplier", Some(r#"{"name":"Acme"}"#)).await;
    let (status, body) = send(&app, "GET", "/supplier/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Acme" }));
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let (_, app) = memory_router();
    send(&app, "POST", "/supplier", Some(r#"{"name":"Acme"}"#)).await;
    let (status, body) = send(&app, "GET", "/supplier/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Supplier not found" }));
}

#[tokio::test]
async fn get_non_numeric_id_is_bad_request() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "GET", "/supplier/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid supplier ID" }));
}

#[tokio::test]
async fn update_then_get_returns_new_name() {
    let (_, app) = memory_router();
    send(&app, "POST", "/supplier", Some(r#"{"name":"Old"}"#)).await;
    let (status, body) = send(&app, "PATCH", "/supplier/1", Some(r#"{"name":"X"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Updated" }));

    let (_, body) = send(&app, "GET", "/supplier/1", None).await;
    assert_eq!(body["name"], "X");
}

#[tokio::test]
async fn update_unknown_id_leaves_table_unchanged() {
    let (_, app) = memory_router();
    send(&app, "POST", "/supplier", Some(r#"{"name":"Keep"}"#)).await;
    let (status, body) = send(&app, "PATCH", "/supplier/9", Some(r#"{"name":"X"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));

    let (_, body) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(body, json!([{ "id": 1, "name": "Keep" }]));
}

#[tokio::test]
async fn update_checks_body_before_existence() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "PATCH", "/supplier/9", Some("nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot parse JSON");
}

#[tokio::test]
async fn delete_then_fetch_and_delete_again_are_not_found() {
    let (store, app) = memory_router();
    send(&app, "POST", "/supplier", Some(r#"{"name":"Acme"}"#)).await;

    let (status, body) = send(&app, "DELETE", "/supplier/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Deleted" }));
    assert!(store.is_empty().await);

    let (status, _) = send(&app, "GET", "/supplier/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&app, "DELETE", "/supplier/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn mutations_with_non_numeric_id_are_bad_request() {
    let (_, app) = memory_router();
    let (status, _) = send(&app, "DELETE", "/supplier/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "PATCH", "/supplier/abc", Some(r#"{"name":"X"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_version() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "supplier-service");
}

#[tokio::test]
async fn readiness_reflects_store() {
    let (store, app) = memory_router();
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": "ok" }));

    store.set_failing(true);
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn oversized_body_is_a_json_bad_request() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt as _;

    let (store, app) = memory_router();
    let payload = json!({ "name": "x".repeat(common::BODY_LIMIT + 1) }).to_string();
    for (method, uri) in [("POST", "/supplier"), ("PATCH", "/supplier/1")] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, payload.len())
            .body(Body::from(payload.clone()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Cannot parse JSON" }));
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn undecodable_id_segment_is_a_json_bad_request() {
    let (_, app) = memory_router();
    for (method, body) in [("GET", None), ("PATCH", Some(r#"{"name":"X"}"#)), ("DELETE", None)] {
        let (status, json) = send(&app, method, "/supplier/%FF", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(json, json!({ "message": "Invalid supplier ID" }), "{method}");
    }
}

#[tokio::test]
async fn null_body_reads_as_no_fields() {
    let (_, app) = memory_router();
    let (status, body) = send(&app, "POST", "/supplier", Some("null")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Name is required" }));

    send(&app, "POST", "/supplier", Some(r#"{"name":"Acme"}"#)).await;
    let (status, _) = send(&app, "PATCH", "/supplier/1", Some("null")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/supplier/1", None).await;
    assert_eq!(body, json!({ "id": 1, "name": "" }));
}
