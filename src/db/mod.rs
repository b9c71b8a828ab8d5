//! Database layer for the site schema using Diesel ORM.
//!
//! The schema is declared and migrated, but no page reads from or writes
//! to it yet. Content management wires it up in a later phase.

pub mod model;
pub mod schema;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{SiteError, SiteResult};

/// Embedded migrations from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database connection pool type alias.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> SiteResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(5)
        .build(manager)
        .map_err(|e| SiteError::Pool(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> SiteResult<()> {
    let mut conn = pool.get().map_err(|e| SiteError::Pool(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| SiteError::Migration(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;
    use tempfile::TempDir;

    use super::model::{NewNewsPost, NewVenue, NewsPost, Venue};
    use super::schema::{news, venues};
    use super::*;

    // Pooled in-memory connections each get a private database, so the
    // migration tests use a file-backed database instead.
    fn temp_pool() -> (DbPool, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let database_url = temp_dir.path().join("site.db").to_string_lossy().to_string();
        let pool = create_pool(&database_url).expect("pool should build");
        run_migrations(&pool).expect("migrations should run");
        (pool, temp_dir)
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn migrations_create_empty_tables() {
        let (pool, _temp) = temp_pool();
        let mut conn = pool.get().expect("connection");

        let count: i64 = news::table.count().get_result(&mut conn).expect("count");
        assert_eq!(count, 0);
    }

    #[test]
    fn news_rows_round_trip() {
        let (pool, _temp) = temp_pool();
        let mut conn = pool.get().expect("connection");

        let post = NewNewsPost {
            slug: "home-opener".to_string(),
            title: "Home Opener Announced".to_string(),
            subtitle: Some("Gates open at noon".to_string()),
            body: None,
            featured_image: None,
            published_at: Some("2026-04-01".to_string()),
        };
        diesel::insert_into(news::table)
            .values(&post)
            .execute(&mut conn)
            .expect("insert");

        let stored: NewsPost = news::table
            .filter(news::slug.eq("home-opener"))
            .first(&mut conn)
            .expect("select");
        assert_eq!(stored.title, "Home Opener Announced");
        assert_eq!(stored.body, None);
    }

    #[test]
    fn venue_details_parse_json_blob() {
        let (pool, _temp) = temp_pool();
        let mut conn = pool.get().expect("connection");

        let venue = NewVenue {
            name: "Cloud City Park".to_string(),
            json: Some(r#"{"capacity":12000}"#.to_string()),
        };
        diesel::insert_into(venues::table)
            .values(&venue)
            .execute(&mut conn)
            .expect("insert");

        let stored: Venue = venues::table.first(&mut conn).expect("select");
        let details = stored.details().expect("details should parse");
        assert_eq!(details["capacity"], 12000);
    }
}
