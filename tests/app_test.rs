use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::fs;
use tempfile::TempDir;
use tower::util::ServiceExt;

fn dist_with_index() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("index.html"),
        "<!DOCTYPE html><title>CBO Explorer</title>",
    )
    .unwrap();
    fs::write(temp.path().join("app.js"), "console.log('ok');").unwrap();
    temp
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_probe() {
    let dist = dist_with_index();
    let app = cbo_explorer::create_app(dist.path().to_str().unwrap());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_serves_static_assets() {
    let dist = dist_with_index();
    let app = cbo_explorer::create_app(dist.path().to_str().unwrap());

    let response = app
        .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "console.log('ok');");
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_index() {
    let dist = dist_with_index();
    let app = cbo_explorer::create_app(dist.path().to_str().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/occupations/252105")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("CBO Explorer"));
}
