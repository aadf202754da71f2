//! Release endpoint and app routing tests

use std::sync::Arc;

use axum::http::StatusCode;
use openapi_server::CreateReleaseArgs;
use serde_json::{json, Value};

use crate::common::{get, image, json_request, raw_request, send, test_app, FakePlatform};

fn platform_with_zenx() -> Arc<FakePlatform> {
    Arc::new(FakePlatform {
        images: vec![image("zenx", "v0")],
        ..Default::default()
    })
}

fn is_generated_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 14
        && bytes[0] == b'v'
        && bytes[7] == b'-'
        && bytes[1..7].iter().all(u8::is_ascii_digit)
        && bytes[8..].iter().all(u8::is_ascii_digit)
}

#[tokio::test]
async fn test_list_releases() {
    let platform = platform_with_zenx();
    let (status, body) = send(test_app(platform.clone()), get("/apps/zenx/releases")).await;

    assert_eq!(status, StatusCode::OK);
    let releases: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(releases[0]["name"], "v1");
    assert_eq!(releases[0]["port"], 8080);
    assert!(releases[0].get("health_check").is_none());
    assert_eq!(platform.calls(), ["list_releases zenx"]);
}

#[tokio::test]
async fn test_create_release_with_unknown_image_is_rejected() {
    let platform = platform_with_zenx();
    let request = json_request(
        "POST",
        "/apps/zenx/releases",
        json!({"image": "other:v9", "flavor": "C1M1"}),
    );

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("other:v9"), "{text}");
    assert!(text.contains("upload"), "{text}");
    assert_eq!(platform.calls(), ["list_images"]);
    assert!(platform.staged().is_none());
}

#[tokio::test]
async fn test_create_release_requires_image() {
    let platform = platform_with_zenx();
    let request = json_request("POST", "/apps/zenx/releases", json!({"flavor": "C1M1"}));

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_create_release_generates_name_and_cleans_up() {
    let platform = platform_with_zenx();
    let request = json_request(
        "POST",
        "/apps/zenx/releases",
        json!({
            "name": "",
            "image": "registry.example.com/team/zenx:v0",
            "flavor": "C1M1",
            "port": 8080,
            "health_check": {"path": "/healthz", "timeout": 3},
            "env": [{"key": "MODE", "value": "prod"}]
        }),
    );

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_slice(&body).unwrap();
    let name = response["name"].as_str().unwrap();
    assert!(is_generated_name(name), "{name}");

    let staged = platform.staged().expect("release was staged");
    let args: CreateReleaseArgs = serde_yaml::from_str(&staged.yaml).unwrap();
    assert_eq!(args.name, name);
    assert_eq!(args.image, "registry.example.com/team/zenx:v0");
    assert_eq!(args.health_check.path, "/healthz");
    assert!(!staged.dir.exists());

    assert_eq!(platform.calls(), ["list_images", "create_release zenx"]);
}

#[tokio::test]
async fn test_create_release_keeps_given_name() {
    let platform = platform_with_zenx();
    let request = json_request(
        "POST",
        "/apps/zenx/releases",
        json!({"name": "zenx-v1", "image": "zenx:v0", "flavor": "C1M1"}),
    );

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response, json!({"name": "zenx-v1"}));
}

#[tokio::test]
async fn test_create_release_failure_still_cleans_up() {
    let platform = Arc::new(FakePlatform {
        images: vec![image("zenx", "v0")],
        fail_create_release: true,
        ..Default::default()
    });
    let request = json_request(
        "POST",
        "/apps/zenx/releases",
        json!({"image": "zenx:v0", "flavor": "C1M1"}),
    );

    let (status, body) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8_lossy(&body).contains("simulated failure"));

    let staged = platform.staged().expect("release was staged");
    assert!(!staged.dir.exists());
}

#[tokio::test]
async fn test_create_release_rejects_unknown_nested_field() {
    let platform = platform_with_zenx();
    let request = json_request(
        "POST",
        "/apps/zenx/releases",
        json!({
            "image": "zenx:v0",
            "health_check": {"path": "/healthz", "interval": 10}
        }),
    );

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_create_release_requires_json_content_type() {
    let platform = platform_with_zenx();
    let request = raw_request(
        "POST",
        "/apps/zenx/releases",
        Some("application/x-www-form-urlencoded"),
        "image=zenx:v0",
    );

    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_app_name_routing() {
    let platform = platform_with_zenx();

    let (status, _) = send(test_app(platform.clone()), get("/apps/-bad/releases")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(test_app(platform.clone()), get("/apps/Bad/releases")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = json_request("POST", "/apps/bad-/releases", json!({"image": "zenx:v0"}));
    let (status, _) = send(test_app(platform.clone()), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(platform.calls().is_empty());

    let (status, _) = send(test_app(platform.clone()), get("/apps/good-1/releases")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(platform.calls(), ["list_releases good-1"]);
}
