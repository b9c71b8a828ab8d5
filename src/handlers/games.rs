//! Games & Schedule Handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    state::AppState,
    templates::{GameCard, GameTemplate, GamesListTemplate, TicketRow},
};

/// Handler for the games listing page.
pub async fn games_index(State(state): State<AppState>) -> impl IntoResponse {
    let games = (1..=5).map(GameCard::placeholder).collect();

    GamesListTemplate {
        chrome: state.chrome("Games & Schedule"),
        games,
    }
}

/// Handler for an individual game page.
///
/// The id is echoed into the title and heading unmodified; the ticket
/// table is static sample inventory.
pub async fn game(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let tickets = vec![
        TicketRow { section: "101", row: "A", seat: 1, price: 25 },
        TicketRow { section: "101", row: "A", seat: 2, price: 25 },
        TicketRow { section: "102", row: "B", seat: 4, price: 30 },
    ];

    GameTemplate {
        chrome: state.chrome(format!("Game {id}")),
        id,
        opponent: "Rivals".to_string(),
        date: "TBD".to_string(),
        venue: "Cloud City Park".to_string(),
        tickets,
    }
}
