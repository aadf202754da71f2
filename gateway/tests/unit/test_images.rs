//! Image and catalog endpoint tests

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{get, image, json_request, raw_request, send, test_app, FakePlatform};

fn platform_with_busybox() -> Arc<FakePlatform> {
    Arc::new(FakePlatform {
        images: vec![image("busybox", "1.36")],
        ..Default::default()
    })
}

#[tokio::test]
async fn test_list_images() {
    let platform = platform_with_busybox();
    let (status, body) = send(test_app(platform.clone()), get("/images")).await;

    assert_eq!(status, StatusCode::OK);
    let images: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(images[0]["name"], "busybox");
    assert_eq!(images[0]["tag"], "1.36");
    assert_eq!(images[0]["ctime"], "2022-12-01T16:58:30+08:00");
}

#[tokio::test]
async fn test_catalog_listings() {
    let platform = Arc::new(FakePlatform::default());

    let (status, body) = send(test_app(platform.clone()), get("/apps")).await;
    assert_eq!(status, StatusCode::OK);
    let apps: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(apps, json!([{"name": "zenx", "desc": "demo"}]));

    let (status, body) = send(test_app(platform.clone()), get("/flavors")).await;
    assert_eq!(status, StatusCode::OK);
    let flavors: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(flavors[0]["memory"], 1024);
    assert!(flavors[0].get("gpu").is_none());

    let (status, body) = send(test_app(platform.clone()), get("/regions")).await;
    assert_eq!(status, StatusCode::OK);
    let regions: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(regions, json!([{"name": "z0"}]));

    assert_eq!(platform.calls(), ["list_apps", "list_flavors", "list_regions"]);
}

#[tokio::test]
async fn test_push_without_content_type_is_rejected() {
    let platform = platform_with_busybox();
    let request = raw_request("POST", "/images", None, r#"{"image":"alpine:3"}"#);

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_with_other_media_type_is_415() {
    let platform = platform_with_busybox();
    let request = raw_request("POST", "/images", Some("text/plain"), r#"{"image":"alpine:3"}"#);

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(String::from_utf8_lossy(&body).contains("application/json"));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_accepts_content_type_parameters() {
    let platform = platform_with_busybox();
    let request = raw_request(
        "POST",
        "/images",
        Some("application/json; charset=utf-8"),
        r#"{"image":"busybox:1.36"}"#,
    );

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_push_rejects_unknown_fields() {
    let platform = platform_with_busybox();
    let request = json_request("POST", "/images", json!({"image": "alpine:3", "force": true}));

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8_lossy(&body).contains("force"));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_oversized_body_is_413() {
    let platform = platform_with_busybox();
    let body = format!(r#"{{"image":"{}"}}"#, "a".repeat(3 * 1024 * 1024));
    let request = raw_request("POST", "/images", Some("application/json"), &body);

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_rejects_malformed_json() {
    let platform = platform_with_busybox();
    let request = raw_request("POST", "/images", Some("application/json"), "{\"image\":");

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_empty_image_stops_early() {
    let platform = platform_with_busybox();
    let request = json_request("POST", "/images", json!({"image": ""}));

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8_lossy(&body).contains("empty image"));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_push_existing_image_is_skipped() {
    let platform = platform_with_busybox();
    let request = json_request(
        "POST",
        "/images",
        json!({"image": "docker.io/library/busybox:1.36"}),
    );

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(platform.calls(), ["list_images"]);
}

#[tokio::test]
async fn test_push_new_image_ensures_then_pushes() {
    let platform = platform_with_busybox();
    let request = json_request("POST", "/images", json!({"image": "alpine:3"}));

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(
        platform.calls(),
        ["list_images", "ensure alpine:3", "push alpine:3"]
    );
}

#[tokio::test]
async fn test_push_ensure_failure_short_circuits() {
    let platform = Arc::new(FakePlatform {
        fail_ensure: true,
        ..Default::default()
    });
    let request = json_request("POST", "/images", json!({"image": "alpine:3"}));

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8_lossy(&body).contains("simulated failure"));
    assert_eq!(platform.calls(), ["list_images", "ensure alpine:3"]);
}

#[tokio::test]
async fn test_push_failure_is_500() {
    let platform = Arc::new(FakePlatform {
        fail_push: true,
        ..Default::default()
    });
    let request = json_request("POST", "/images", json!({"image": "alpine:3"}));

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8_lossy(&body).contains("err push image alpine:3"));
    assert_eq!(
        platform.calls(),
        ["list_images", "ensure alpine:3", "push alpine:3"]
    );
}

#[tokio::test]
async fn test_health_and_version() {
    let platform = Arc::new(FakePlatform::default());

    let (status, body) = send(test_app(platform.clone()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");

    let (status, body) = send(test_app(platform.clone()), get("/version")).await;
    assert_eq!(status, StatusCode::OK);
    let version: Value = serde_json::from_slice(&body).unwrap();
    assert!(version["version"].is_string());
    assert!(platform.calls().is_empty());
}
