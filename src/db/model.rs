//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{design_tokens, games, news, players, products, venues};

/// Database row for a design token.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = design_tokens)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DesignToken {
    pub key: String,
    pub value: String,
}

/// Database row for a news post.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = news)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewsPost {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<String>,
}

/// Database row for a news post (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = news)]
pub struct NewNewsPost {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<String>,
}

/// Database row for a player.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// Database row for a player (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = players)]
pub struct NewPlayer {
    pub name: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// Database row for a product.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

/// Database row for a venue.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = venues)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub json: Option<String>,
}

/// Database row for a venue (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = venues)]
pub struct NewVenue {
    pub name: String,
    pub json: Option<String>,
}

impl Venue {
    /// Parses the free-form JSON blob, if any.
    pub fn details(&self) -> Option<serde_json::Value> {
        self.json.as_deref().and_then(|raw| serde_json::from_str(raw).ok())
    }
}

/// Database row for a game.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub opponent: String,
    pub venue_id: i32,
}

/// Database row for a game (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = games)]
pub struct NewGame {
    pub title: String,
    pub date: String,
    pub opponent: String,
    pub venue_id: i32,
}
