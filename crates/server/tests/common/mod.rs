use std::net::SocketAddr;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, AppState};
use service::runtime::Services;

pub struct TestApp {
    pub base_url: String,
    client: reqwest::Client,
}

/// Serve a router over fresh in-memory storage on an ephemeral port; nothing is seeded.
pub async fn app() -> TestApp {
    let app = build_router(AppState::from(Services::in_memory()), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    TestApp { base_url, client: reqwest::Client::new() }
}

/// Send one request and decode the body as JSON; `Null` when empty, a string when not JSON.
pub async fn send(app: &TestApp, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = app.client.request(method, format!("{}{}", app.base_url, path));
    if let Some(json) = body {
        req = req.json(&json);
    }
    let res = req.send().await.expect("request");
    let status = res.status();
    let text = res.text().await.expect("body");
    let json = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    };
    (status, json)
}
