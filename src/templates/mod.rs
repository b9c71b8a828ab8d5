//! Askama Templates
//!
//! Template structs for rendering HTML pages.

use askama::Template;
use askama_web::WebTemplate;

/// Shared layout data consumed by the base template: navigation, footer,
/// design-token CSS and the asset cache-busting version.
pub struct Chrome {
    pub title: String,
    pub site_name: String,
    pub tokens_css: String,
    pub year: i32,
    pub cart_count: u32,
    pub version: &'static str,
}

/// Card for a game in a listing grid.
pub struct GameCard {
    pub number: u32,
    pub opponent: String,
    pub date: String,
    pub venue: String,
    pub image: String,
}

impl GameCard {
    /// Sample card until the games table is wired up.
    pub fn placeholder(number: u32) -> Self {
        Self {
            number,
            opponent: "Rivals".to_string(),
            date: "TBD".to_string(),
            venue: "Cloud City Park".to_string(),
            image: format!("https://placehold.co/600x300?text=Game+{number}"),
        }
    }
}

/// Card for a news post in a listing grid.
pub struct NewsCard {
    pub href: String,
    pub headline: String,
    pub meta: String,
    pub image: String,
}

/// Card for a player in the team grid.
pub struct PlayerCard {
    pub name: String,
    pub blurb: String,
    pub image: String,
}

/// Card for a product in the shop grid.
pub struct ProductCard {
    pub id: u32,
    pub title: String,
    pub image: String,
}

/// Row of the static ticket table on a game page.
pub struct TicketRow {
    pub section: &'static str,
    pub row: &'static str,
    pub seat: u32,
    pub price: u32,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub games: Vec<GameCard>,
    pub posts: Vec<NewsCard>,
}

/// Team page template.
#[derive(Template, WebTemplate)]
#[template(path = "team.html")]
pub struct TeamTemplate {
    pub chrome: Chrome,
    pub players: Vec<PlayerCard>,
}

/// News list page template.
#[derive(Template, WebTemplate)]
#[template(path = "news/index.html")]
pub struct NewsListTemplate {
    pub chrome: Chrome,
    pub posts: Vec<NewsCard>,
}

/// Individual news post template.
#[derive(Template, WebTemplate)]
#[template(path = "news/post.html")]
pub struct NewsPostTemplate {
    pub chrome: Chrome,
    pub slug: String,
    pub headline: String,
    pub meta: String,
    pub body: String,
    pub image: String,
}

/// Games list page template.
#[derive(Template, WebTemplate)]
#[template(path = "games/index.html")]
pub struct GamesListTemplate {
    pub chrome: Chrome,
    pub games: Vec<GameCard>,
}

/// Individual game page template with the static ticket table.
#[derive(Template, WebTemplate)]
#[template(path = "games/game.html")]
pub struct GameTemplate {
    pub chrome: Chrome,
    pub id: String,
    pub opponent: String,
    pub date: String,
    pub venue: String,
    pub tickets: Vec<TicketRow>,
}

/// Shop list page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub chrome: Chrome,
    pub products: Vec<ProductCard>,
}

/// Individual product page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/product.html")]
pub struct ProductTemplate {
    pub chrome: Chrome,
    pub id: String,
    pub price: String,
    pub description: String,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: Chrome,
}
