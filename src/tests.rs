//! Integration tests for the site routes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use diesel::prelude::*;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::util::ServiceExt;

use crate::config::SiteConfig;
use crate::db;
use crate::router::create_router;
use crate::state::AppState;

fn test_router() -> axum::Router {
    let config = SiteConfig::new();
    create_router(AppState::new(&config, None), &config)
}

async fn get(router: axum::Router, path: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).expect("valid request"))
        .await
        .expect("request should not fail");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("body should be utf-8"))
}

#[tokio::test]
async fn test_home_page_renders() {
    let (status, body) = get(test_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to the Cloud City Sluggers"));
    assert!(body.contains("Next Games"));
    assert!(body.contains("Recent News"));
    assert!(body.contains("Sign up for our newsletter"));
}

#[tokio::test]
async fn test_team_page_renders() {
    let (status, body) = get(test_router(), "/team").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Team</h1>"));
    assert!(body.contains("Player 6"));
}

#[tokio::test]
async fn test_news_index_renders() {
    let (status, body) = get(test_router(), "/news").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>News</h1>"));
    assert!(body.contains("Post Title 1"));
}

#[tokio::test]
async fn test_news_post_echoes_slug() {
    let (status, body) = get(test_router(), "/news/opening-day-recap").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Big Win Last Night"));
    assert!(body.contains("news/opening-day-recap"));
}

#[tokio::test]
async fn test_games_index_renders() {
    let (status, body) = get(test_router(), "/games").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Games &amp; Schedule"));
    assert!(body.contains("Game 5 vs Rivals"));
}

#[tokio::test]
async fn test_game_page_echoes_id() {
    let (status, body) = get(test_router(), "/games/7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Game 7"));
    assert!(body.contains("Tickets"));
    assert!(body.contains("<td>101</td>"));
}

#[tokio::test]
async fn test_shop_index_renders() {
    let (status, body) = get(test_router(), "/shop").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Shop</h1>"));
    assert!(body.contains("Product 6"));
}

#[tokio::test]
async fn test_product_page_echoes_id() {
    let (status, body) = get(test_router(), "/shop/9").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Product 9"));
    assert!(body.contains("$49.00"));
}

#[tokio::test]
async fn test_assets_served_with_cache_header() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/assets/css/base.css")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request should not fail");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );
}

#[tokio::test]
async fn test_unmatched_route_returns_404() {
    let (status, body) = get(test_router(), "/no-such-page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found."));
}

#[tokio::test]
async fn test_cart_route_is_not_declared() {
    // The nav links /cart; the route is intentionally absent until the
    // commerce phase.
    let (status, _) = get(test_router(), "/cart").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_newsletter_redirects_with_form_body() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/newsletter")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("email=fan@example.com"))
                .expect("valid request"),
        )
        .await
        .expect("request should not fail");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_newsletter_redirects_with_empty_body() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/newsletter")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request should not fail");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_page_title_includes_site_name() {
    let config = SiteConfig::new().with_site_name("Test Nine");
    let router = create_router(AppState::new(&config, None), &config);

    let (_, body) = get(router, "/team").await;
    assert!(body.contains("<title>Team · Test Nine</title>"));
}

#[tokio::test]
async fn test_design_tokens_emitted_in_head() {
    let (_, body) = get(test_router(), "/").await;

    assert!(body.contains(":root{--bg:#fff;--fg:#000;--link:#000;--muted:#444;--maxw:1200px}"));
}

#[tokio::test]
async fn test_requests_leave_schema_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let database_url = temp_dir.path().join("site.db").to_string_lossy().to_string();

    let pool = db::create_pool(&database_url).expect("Failed to create pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let config = SiteConfig::new().with_database_url(&database_url);
    let state = AppState::new(&config, Some(pool.clone()));
    let router = create_router(state, &config);

    let paths = [
        "/", "/team", "/news", "/news/sample-post", "/games", "/games/7", "/shop", "/shop/2", "/missing",
    ];
    for path in paths {
        let _ = get(router.clone(), path).await;
    }
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/newsletter")
                .body(Body::from("email=fan@example.com"))
                .expect("valid request"),
        )
        .await
        .expect("request should not fail");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    use crate::db::schema::{design_tokens, games, news, players, products, venues};
    let mut conn = pool.get().expect("Failed to get connection");

    assert_eq!(design_tokens::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
    assert_eq!(news::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
    assert_eq!(players::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
    assert_eq!(products::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
    assert_eq!(venues::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
    assert_eq!(games::table.count().get_result::<i64>(&mut conn).expect("count"), 0);
}
