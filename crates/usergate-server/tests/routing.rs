use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use usergate_db::{create_pool, run_migrations, DbRuntimeSettings};
use usergate_server::{app, AppState};

fn build_test_app() -> Router {
    // A pool of one so migrations and handlers share the same `:memory:`
    // connection.
    let settings = DbRuntimeSettings {
        pool_max_size: 1,
        ..DbRuntimeSettings::default()
    };
    let pool = create_pool(":memory:", settings).unwrap();
    {
        let conn = pool.get().unwrap();
        run_migrations(&conn).unwrap();
    }
    app(AppState { pool })
}

#[tokio::test]
async fn index_serves_the_embedded_page() {
    let response = build_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got: {content_type}");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(std::str::from_utf8(&body).unwrap().contains("UserGate"));
}

#[tokio::test]
async fn unknown_path_returns_the_endpoint_listing() {
    let response = build_test_app()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "error": "Not Found",
            "endpoints": ["/api/data", "/api/data/filter?status=X"]
        })
    );
}

#[tokio::test]
async fn wrong_method_on_a_known_path_is_also_a_404() {
    let response = build_test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Not Found");
}

#[tokio::test]
async fn options_gets_an_empty_200_on_any_path() {
    for uri in ["/", "/api/data", "/api/data/filter?status=x", "/anything"] {
        let response = build_test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {uri}");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty(), "OPTIONS {uri} should have an empty body");
    }
}

#[tokio::test]
async fn every_response_carries_cors_and_no_cache_headers() {
    for uri in ["/", "/api/data", "/api/nope"] {
        let response = build_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*"),
            "GET {uri} missing permissive CORS allow"
        );
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .map(|v| v.to_str().unwrap()),
            Some("no-cache"),
            "GET {uri} missing no-cache directive"
        );
    }
}
