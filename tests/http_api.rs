//! End-to-end tests against a real listener on an ephemeral port.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use echo_gateway::api;
use echo_gateway::app_state::AppState;
use echo_gateway::persistence::InMemoryStore;
use serde_json::{Value, json};

async fn spawn(state: AppState) -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, api::build_app(state)).await;
    });
    addr
}

async fn post_raw(addr: SocketAddr, path: &str, body: &'static str) -> (u16, Value) {
    let client = reqwest::Client::new();
    let Ok(resp) = client
        .post(format!("http://{addr}{path}"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
    else {
        panic!("request to {path} failed");
    };
    let status = resp.status().as_u16();
    let Ok(json) = resp.json::<Value>().await else {
        panic!("json body from {path}");
    };
    (status, json)
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let Ok(resp) = reqwest::get(format!("http://{addr}{path}")).await else {
        panic!("request to {path} failed");
    };
    let status = resp.status().as_u16();
    let Ok(json) = resp.json::<Value>().await else {
        panic!("json body from {path}");
    };
    (status, json)
}

#[tokio::test]
async fn greeting_over_the_wire() {
    let addr = spawn(AppState::default()).await;
    let Ok(resp) = reqwest::get(format!("http://{addr}/")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let Ok(text) = resp.text().await else {
        panic!("text body");
    };
    assert_eq!(text, "Hello, Serverless! 🚀\n");
}

#[tokio::test]
async fn echo_covers_each_json_variant() {
    let addr = spawn(AppState::default()).await;
    let cases: [(&'static str, Value, u64); 6] = [
        ("null", json!(null), 0),
        ("true", json!(true), 4),
        ("0", json!(0), 0),
        (r#""héllo""#, json!("héllo"), 5),
        ("[]", json!([]), 0),
        (r#"{"k":"v"}"#, json!({"k": "v"}), 10),
    ];
    for (raw, expected, length) in cases {
        let (status, body) = post_raw(addr, "/echo", raw).await;
        assert_eq!(status, 200, "{raw}");
        assert_eq!(body["status"], json!("received"));
        assert_eq!(body["you_sent"], expected, "{raw}");
        assert_eq!(body["length"], json!(length), "{raw}");
    }
}

#[tokio::test]
async fn degraded_mode_returns_fixed_error() {
    let addr = spawn(AppState::default()).await;
    let (status, body) = post_raw(addr, "/save", r#"{"message":"hi"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "DB not connected"}));

    let (status, body) = get_json(addr, "/messages").await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "DB not connected"}));
}

#[tokio::test]
async fn list_is_capped_at_ten_newest_first() {
    let addr = spawn(AppState::new(Some(Arc::new(InMemoryStore::new())))).await;
    let bodies = [
        r#"{"message":"m1"}"#,
        r#"{"message":"m2"}"#,
        r#"{"message":"m3"}"#,
        r#"{"message":"m4"}"#,
        r#"{"message":"m5"}"#,
        r#"{"message":"m6"}"#,
        r#"{"message":"m7"}"#,
        r#"{"message":"m8"}"#,
        r#"{"message":"m9"}"#,
        r#"{"message":"m10"}"#,
        r#"{"message":"m11"}"#,
        r#"{"message":"hi"}"#,
    ];
    for body in bodies {
        let (status, _) = post_raw(addr, "/save", body).await;
        assert_eq!(status, 200);
    }

    let (status, body) = get_json(addr, "/messages").await;
    assert_eq!(status, 200);
    let Some(items) = body.as_array() else {
        panic!("array expected");
    };
    assert_eq!(items.len(), 10);
    assert_eq!(items.first().map(|m| m["text"].clone()), Some(json!("hi")));
    let ids: Vec<i64> = items.iter().filter_map(|m| m["id"].as_i64()).collect();
    assert_eq!(ids, (3..=12).rev().collect::<Vec<i64>>());
}
