//! Team Page Handler

use axum::{extract::State, response::IntoResponse};

use crate::{
    state::AppState,
    templates::{PlayerCard, TeamTemplate},
};

/// Handler for the team roster page.
pub async fn team(State(state): State<AppState>) -> impl IntoResponse {
    let players = (1..=6)
        .map(|i| PlayerCard {
            name: format!("Player {i}"),
            blurb: "Position · Short bio goes here.".to_string(),
            image: format!("https://placehold.co/600x600?text=Player+{i}"),
        })
        .collect();

    TeamTemplate {
        chrome: state.chrome("Team"),
        players,
    }
}
