//! Router Configuration
//!
//! Route configuration for the website.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{config::SiteConfig, handlers, state::AppState};

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &SiteConfig) -> Router {
    // Static file service with cache headers. The ?v= query parameter on
    // asset links provides cache busting when files change.
    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new(&config.assets_dir));

    let router = Router::new()
        .route("/", get(handlers::home::home))
        .route("/team", get(handlers::team::team))
        .route("/news", get(handlers::news::news_index))
        .route("/news/{slug}", get(handlers::news::news_post))
        .route("/games", get(handlers::games::games_index))
        .route("/games/{id}", get(handlers::games::game))
        .route("/shop", get(handlers::shop::shop_index))
        .route("/shop/{id}", get(handlers::shop::product))
        .route("/newsletter", post(handlers::newsletter::subscribe))
        .nest_service("/assets", static_service)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http());

    #[cfg(debug_assertions)]
    let router = router.route("/__livereload", get(crate::dev_tools::livereload_handler));

    router.with_state(state)
}
