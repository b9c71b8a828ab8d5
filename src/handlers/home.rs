//! Home Page Handler

use axum::{extract::State, response::IntoResponse};

use crate::{
    state::AppState,
    templates::{GameCard, HomeTemplate, NewsCard},
};

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let games = (1..=3).map(GameCard::placeholder).collect();
    let posts = (1..=3)
        .map(|i| NewsCard {
            href: "/news/sample-post".to_string(),
            headline: format!("News Headline {i}"),
            meta: "Subtitle · 2025-01-01".to_string(),
            image: format!("https://placehold.co/600x300?text=News+{i}"),
        })
        .collect();

    HomeTemplate {
        chrome: state.chrome("Home"),
        games,
        posts,
    }
}
