//! News Handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    state::AppState,
    templates::{NewsCard, NewsListTemplate, NewsPostTemplate},
};

/// Handler for the news listing page.
pub async fn news_index(State(state): State<AppState>) -> impl IntoResponse {
    let posts = (1..=6)
        .map(|i| NewsCard {
            href: "/news/sample-post".to_string(),
            headline: format!("Post Title {i}"),
            meta: String::new(),
            image: format!("https://placehold.co/600x300?text=Post+{i}"),
        })
        .collect();

    NewsListTemplate {
        chrome: state.chrome("News"),
        posts,
    }
}

/// Handler for a single news post.
///
/// The slug is echoed into the permalink line; the post itself is
/// placeholder content until the news table is wired up.
pub async fn news_post(State(state): State<AppState>, Path(slug): Path<String>) -> impl IntoResponse {
    NewsPostTemplate {
        chrome: state.chrome("News Post"),
        slug,
        headline: "Big Win Last Night".to_string(),
        meta: "Subtitle · 2025-01-01".to_string(),
        body: "Body content coming soon.".to_string(),
        image: "https://placehold.co/1600x600?text=Featured+Image".to_string(),
    }
}
