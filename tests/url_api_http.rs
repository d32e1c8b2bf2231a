mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{TEST_TOKEN, spawn_backend};
use shortly_client::domain::entities::{Tier, User};
use shortly_client::domain::ports::UrlListQuery;
use shortly_client::prelude::*;

async fn api() -> Arc<HttpUrlApi> {
    let base = spawn_backend().await;
    Arc::new(HttpUrlApi::new(&base, Duration::from_secs(5)).unwrap())
}

fn signed_in(tier: Tier, url_count: u64) -> Arc<StaticSession> {
    Arc::new(StaticSession::authenticated(
        User::new(Some("user@example.com".to_string()), tier, url_count),
        TEST_TOKEN,
    ))
}

#[tokio::test]
async fn test_shorten_with_generated_code() {
    let shortener = ShortenerService::new(api().await, signed_in(Tier::Free, 3));

    let shortened = shortener
        .shorten("  https://example.com/very/long/path  ", None)
        .await
        .unwrap();

    assert_eq!(shortened.original_url, "https://example.com/very/long/path");
    assert_eq!(shortened.short_code.as_deref(), Some("gen1234"));
    assert_eq!(shortened.short_url, "http://localhost:5000/gen1234");
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let shortener = ShortenerService::new(api().await, signed_in(Tier::Premium, 500));

    let shortened = shortener
        .shorten("https://example.com/promo", Some("promo24"))
        .await
        .unwrap();

    assert_eq!(shortened.short_url, "http://localhost:5000/promo24");
}

#[tokio::test]
async fn test_shorten_reports_backend_message() {
    let shortener = ShortenerService::new(api().await, signed_in(Tier::Free, 3));

    let err = shortener
        .shorten("https://example.com/x", Some("taken12"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Custom code already in use");
}

#[tokio::test]
async fn test_shorten_maps_limit_flag() {
    let shortener = ShortenerService::new(api().await, signed_in(Tier::Free, 3));

    let err = shortener
        .shorten("https://example.com/over-limit", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::LimitReached));
}

#[tokio::test]
async fn test_shorten_blocked_locally_at_tier_limit() {
    let shortener = ShortenerService::new(api().await, signed_in(Tier::Free, 100));

    let err = shortener
        .shorten("https://example.com/x", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::TierLimit { limit: 100 }));
}

#[tokio::test]
async fn test_shorten_bad_token_is_api_error() {
    let api = api().await;
    let session = Arc::new(StaticSession::authenticated(
        User::new(None, Tier::Free, 0),
        "expired-token",
    ));
    let shortener = ShortenerService::new(api, session);

    let err = shortener
        .shorten("https://example.com/x", None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_list_urls_sends_query() {
    let api = api().await;

    let page = api
        .list_urls(
            TEST_TOKEN,
            &UrlListQuery {
                page: 2,
                limit: 5,
                search: "docs".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 5);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].short_code, "docs01");
    assert_eq!(page.items[0].id, "id-docs01");
    assert_eq!(page.items[0].clicks, 2);
}

#[tokio::test]
async fn test_dashboard_service_round_trip() {
    let dashboard = DashboardService::new(api().await, signed_in(Tier::Free, 2));

    let page = dashboard.list_urls(0, 500, "  ").await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 100);
    assert_eq!(page.total, 2);

    let stats = dashboard.stats().await.unwrap();
    assert_eq!(stats.total_urls, 2);
    assert_eq!(stats.total_clicks, 9);
    assert_eq!(stats.top_clicks(), 7);
    assert_eq!(stats.recent_clicks.len(), 2);
    assert_eq!(stats.recent_clicks[0].date, "2024-03-01");

    dashboard.delete_url("abc123").await.unwrap();

    let err = dashboard.delete_url("nope99").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "URL not found");
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let dashboard = DashboardService::new(api().await, Arc::new(StaticSession::anonymous()));

    assert!(matches!(
        dashboard.stats().await.unwrap_err(),
        ClientError::Unauthenticated
    ));
}
