//! Villa repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use villastay_core::error::{AppError, ErrorKind};
use villastay_core::result::AppResult;
use villastay_core::traits::repository::Repository;
use villastay_core::types::filter::FilterField;
use villastay_entity::villa::{NewVilla, Villa};

use super::push_filters;

/// Columns villa list queries may filter on.
const FILTERABLE: &[&str] = &["name", "occupancy", "sqft", "rate"];

/// Repository for villa CRUD queries.
#[derive(Debug, Clone)]
pub struct VillaRepository {
    pool: PgPool,
}

impl VillaRepository {
    /// Create a new villa repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full replace of all mutable fields by identity.
    pub async fn update(&self, id: i32, data: &NewVilla) -> AppResult<Villa> {
        sqlx::query_as::<_, Villa>(
            "UPDATE villas SET name = $2, details = $3, rate = $4, sqft = $5, occupancy = $6, \
             image_url = $7, amenity = $8, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.details)
        .bind(data.rate)
        .bind(data.sqft)
        .bind(data.occupancy)
        .bind(&data.image_url)
        .bind(&data.amenity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &data.name))?
        .ok_or_else(|| AppError::not_found(format!("Villa {id} not found")))
    }
}

#[async_trait]
impl Repository<Villa, NewVilla, i32> for VillaRepository {
    async fn find_by_id(&self, id: &i32) -> AppResult<Option<Villa>> {
        sqlx::query_as::<_, Villa>("SELECT * FROM villas WHERE id = $1")
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find villa", e))
    }

    async fn find_all(&self, filters: &[FilterField]) -> AppResult<Vec<Villa>> {
        let mut builder = sqlx::QueryBuilder::new("SELECT * FROM villas");
        push_filters(&mut builder, filters, FILTERABLE)?;
        builder.push(" ORDER BY id ASC");

        builder
            .build_query_as::<Villa>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list villas", e))
    }

    async fn create(&self, data: &NewVilla) -> AppResult<Villa> {
        sqlx::query_as::<_, Villa>(
            "INSERT INTO villas (name, details, rate, sqft, occupancy, image_url, amenity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.details)
        .bind(data.rate)
        .bind(data.sqft)
        .bind(data.occupancy)
        .bind(&data.image_url)
        .bind(&data.amenity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &data.name))
    }

    async fn delete(&self, id: &i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM villas WHERE id = $1")
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete villa", e))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Translate write faults, surfacing the name-uniqueness constraint as a
/// conflict instead of a bare database error.
fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("villas_name_lower_key") =>
        {
            AppError::conflict(format!("Villa '{name}' already exists"))
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to write villa", e),
    }
}
