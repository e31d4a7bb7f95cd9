use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::cafe::{Cafe, CafeRecord},
};

/// Cafe store for database operations
#[derive(Clone)]
pub struct CafeStore {
    pool: DbPool,
}

impl CafeStore {
    /// Create a new CafeStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all cafes in insertion order
    pub async fn list_all(&self) -> Result<Vec<Cafe>> {
        let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafe ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(cafes)
    }

    /// Get a cafe by ID
    pub async fn get(&self, id: i64) -> Result<Cafe> {
        let cafe = sqlx::query_as::<_, Cafe>("SELECT * FROM cafe WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::CafeNotFound(id))?;

        Ok(cafe)
    }

    /// Insert a new cafe and return the stored row
    pub async fn insert(&self, record: &CafeRecord) -> Result<Cafe> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafe (
                name, map_url, img_url, location,
                has_sockets, has_toilet, has_wifi, can_take_calls,
                seats, coffee_price
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.map_url)
        .bind(&record.img_url)
        .bind(&record.location)
        .bind(record.has_sockets)
        .bind(record.has_toilet)
        .bind(record.has_wifi)
        .bind(record.can_take_calls)
        .bind(&record.seats)
        .bind(&record.coffee_price)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &record.name))?;

        let id = result.last_insert_rowid();
        tracing::info!("Inserted cafe {} ({})", id, record.name);

        self.get(id).await
    }

    /// Overwrite every mutable field of an existing cafe
    pub async fn update(&self, id: i64, record: &CafeRecord) -> Result<Cafe> {
        let result = sqlx::query(
            r#"
            UPDATE cafe
            SET name = ?, map_url = ?, img_url = ?, location = ?,
                has_sockets = ?, has_toilet = ?, has_wifi = ?, can_take_calls = ?,
                seats = ?, coffee_price = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.map_url)
        .bind(&record.img_url)
        .bind(&record.location)
        .bind(record.has_sockets)
        .bind(record.has_toilet)
        .bind(record.has_wifi)
        .bind(record.can_take_calls)
        .bind(&record.seats)
        .bind(&record.coffee_price)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &record.name))?;

        if result.rows_affected() == 0 {
            return Err(AppError::CafeNotFound(id));
        }
        tracing::info!("Updated cafe {}", id);

        self.get(id).await
    }

    /// Delete a cafe by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::CafeNotFound(id));
        }
        tracing::info!("Deleted cafe {}", id);

        Ok(())
    }
}

// The only unique column is `name`.
fn write_error(err: sqlx::Error, name: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateName(name.to_string())
        }
        _ => AppError::Database(err),
    }
}
