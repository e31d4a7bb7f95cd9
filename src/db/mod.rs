use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod cafe_store;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
pub async fn setup_database(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cafe (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            name VARCHAR(250) NOT NULL UNIQUE,
            map_url VARCHAR(250) NOT NULL,
            img_url VARCHAR(500) NOT NULL,
            location VARCHAR(250) NOT NULL,
            has_sockets BOOLEAN NOT NULL,
            has_toilet BOOLEAN NOT NULL,
            has_wifi BOOLEAN NOT NULL,
            can_take_calls BOOLEAN NOT NULL,
            seats VARCHAR(250),
            coffee_price VARCHAR(250)
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
