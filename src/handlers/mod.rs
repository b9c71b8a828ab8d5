//! Page Handlers

pub mod games;
pub mod home;
pub mod news;
pub mod newsletter;
pub mod shop;
pub mod team;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{state::AppState, templates::NotFoundTemplate};

/// Fallback handler for unmatched routes.
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            chrome: state.chrome("Not Found"),
        },
    )
}
