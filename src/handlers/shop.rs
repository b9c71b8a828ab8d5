//! Shop Handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    state::AppState,
    templates::{ProductCard, ProductTemplate, ShopTemplate},
};

/// Handler for the shop listing page.
pub async fn shop_index(State(state): State<AppState>) -> impl IntoResponse {
    let products = (1..=6)
        .map(|i| ProductCard {
            id: i,
            title: format!("Product {i}"),
            image: format!("https://placehold.co/600x600?text=Product+{i}"),
        })
        .collect();

    ShopTemplate {
        chrome: state.chrome("Shop"),
        products,
    }
}

/// Handler for an individual product page.
pub async fn product(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    ProductTemplate {
        chrome: state.chrome(format!("Product {id}")),
        id,
        price: "$49.00".to_string(),
        description: "Product description coming soon.".to_string(),
    }
}
