#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use shortly_client::domain::ports::Navigator;
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "test-token";

/// Starts the stub backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });

    format!("http://{addr}")
}

/// Base URL of a port nobody listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn router() -> Router {
    Router::new()
        .route("/api/url/shorten", post(shorten))
        .route("/api/url/{code}", get(lookup).delete(delete_url))
        .route("/api/dashboard/urls", get(list_urls))
        .route("/api/dashboard/stats", get(stats))
}

async fn lookup(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "abc123" => (StatusCode::FOUND, [(header::LOCATION, "https://openai.com")]).into_response(),
        "perm01" => (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, "https://example.com/permanent")],
        )
            .into_response(),
        "noloc1" => StatusCode::FOUND.into_response(),
        "cafe01" => found_with_raw_location("https://example.com/café".as_bytes()),
        "latin1" => found_with_raw_location(b"https://example.com/caf\xe9"),
        "huge01" => Json(json!({
            "url": "https://example.com/huge",
            "padding": "x".repeat(128 * 1024)
        }))
        .into_response(),
        "json01" => Json(json!({
            "url": "https://example.com/y",
            "originalUrl": "https://example.com/y",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .into_response(),
        "empty1" => StatusCode::OK.into_response(),
        "gone01" => (StatusCode::GONE, Json(json!({ "message": "URL has expired" }))).into_response(),
        "busy01" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        "boom01" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "slow01" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::FOUND, [(header::LOCATION, "https://example.com/late")]).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "URL not found" }))).into_response(),
    }
}

/// 302 whose `Location` is sent as raw bytes, without percent-encoding.
fn found_with_raw_location(location: &[u8]) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    response
        .headers_mut()
        .insert(header::LOCATION, HeaderValue::from_bytes(location).unwrap());
    response
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TEST_TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Not authorized, token failed" })),
    )
        .into_response()
}

async fn shorten(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let original_url = body["originalUrl"].as_str().unwrap_or_default().to_string();
    let custom_code = body["customCode"].as_str().map(str::to_string);

    if original_url.contains("over-limit") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "message": "URL limit reached. Please upgrade to premium.",
                "limitReached": true
            })),
        )
            .into_response();
    }

    if custom_code.as_deref() == Some("taken12") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Custom code already in use" })),
        )
            .into_response();
    }

    let code = custom_code.unwrap_or_else(|| "gen1234".to_string());
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "url": {
                "originalUrl": original_url,
                "shortCode": code,
                "shortUrl": format!("http://localhost:5000/{code}")
            }
        })),
    )
        .into_response()
}

async fn list_urls(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u32 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);
    let search = params.get("search").cloned().unwrap_or_default();

    let urls: Vec<Value> = [
        ("abc123", "https://openai.com", 7),
        ("docs01", "https://docs.rs/tokio", 2),
    ]
    .into_iter()
    .filter(|(code, url, _)| search.is_empty() || code.contains(&search) || url.contains(&search))
    .map(|(code, url, clicks)| {
        json!({
            "_id": format!("id-{code}"),
            "originalUrl": url,
            "shortCode": code,
            "shortUrl": format!("http://localhost:5000/{code}"),
            "clicks": clicks,
            "createdAt": "2024-03-01T12:00:00.000Z"
        })
    })
    .collect();

    let total = urls.len();
    Json(json!({
        "urls": urls,
        "pagination": { "page": page, "limit": limit, "total": total, "pages": 1 }
    }))
    .into_response()
}

async fn stats(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    Json(json!({
        "stats": {
            "totalUrls": 2,
            "totalClicks": 9,
            "topUrls": [
                { "shortCode": "abc123", "originalUrl": "https://openai.com", "clicks": 7 },
                { "shortCode": "docs01", "originalUrl": "https://docs.rs/tokio", "clicks": 2 }
            ],
            "recentClicks": [
                { "_id": "2024-03-01", "clicks": 4 },
                { "_id": "2024-03-02", "clicks": 5 }
            ]
        }
    }))
    .into_response()
}

async fn delete_url(headers: HeaderMap, Path(code): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    if code == "abc123" {
        Json(json!({ "message": "URL deleted" })).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "URL not found" }))).into_response()
    }
}

/// Navigator that records every call.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
    home: Mutex<u32>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }

    pub fn home_visits(&self) -> u32 {
        *self.home.lock().unwrap()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: &str) {
        self.visits.lock().unwrap().push(destination.to_string());
    }

    fn go_home(&self) {
        *self.home.lock().unwrap() += 1;
    }
}
