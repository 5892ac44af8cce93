//! Villa number repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use villastay_core::error::{AppError, ErrorKind};
use villastay_core::result::AppResult;
use villastay_core::traits::repository::Repository;
use villastay_core::types::filter::FilterField;
use villastay_entity::villa_number::{NewVillaNumber, VillaNumber};

use super::push_filters;

/// Columns villa number list queries may filter on.
const FILTERABLE: &[&str] = &["villa_id", "special_details"];

/// Repository for villa number CRUD queries.
#[derive(Debug, Clone)]
pub struct VillaNumberRepository {
    pool: PgPool,
}

impl VillaNumberRepository {
    /// Create a new villa number repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full replace of all mutable fields, keyed by the payload's unit
    /// number.
    pub async fn update(&self, data: &NewVillaNumber) -> AppResult<VillaNumber> {
        sqlx::query_as::<_, VillaNumber>(
            "UPDATE villa_numbers SET special_details = $2, villa_id = $3, updated_at = NOW() \
             WHERE villa_no = $1 RETURNING *",
        )
        .bind(data.villa_no)
        .bind(&data.special_details)
        .bind(data.villa_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, data))?
        .ok_or_else(|| AppError::not_found(format!("Villa number {} not found", data.villa_no)))
    }
}

#[async_trait]
impl Repository<VillaNumber, NewVillaNumber, i32> for VillaNumberRepository {
    async fn find_by_id(&self, villa_no: &i32) -> AppResult<Option<VillaNumber>> {
        sqlx::query_as::<_, VillaNumber>("SELECT * FROM villa_numbers WHERE villa_no = $1")
            .bind(*villa_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find villa number", e)
            })
    }

    async fn find_all(&self, filters: &[FilterField]) -> AppResult<Vec<VillaNumber>> {
        let mut builder = sqlx::QueryBuilder::new("SELECT * FROM villa_numbers");
        push_filters(&mut builder, filters, FILTERABLE)?;
        builder.push(" ORDER BY villa_no ASC");

        builder
            .build_query_as::<VillaNumber>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list villa numbers", e)
            })
    }

    async fn create(&self, data: &NewVillaNumber) -> AppResult<VillaNumber> {
        sqlx::query_as::<_, VillaNumber>(
            "INSERT INTO villa_numbers (villa_no, special_details, villa_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.villa_no)
        .bind(&data.special_details)
        .bind(data.villa_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, data))
    }

    async fn delete(&self, villa_no: &i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM villa_numbers WHERE villa_no = $1")
            .bind(*villa_no)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete villa number", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Translate write faults into the error kinds the API reports: duplicate
/// identity or detail text becomes a conflict, a dangling villa reference
/// becomes a validation error.
fn map_write_error(e: sqlx::Error, data: &NewVillaNumber) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        match db_err.constraint() {
            Some("villa_numbers_pkey") => {
                return AppError::conflict(format!(
                    "Villa number {} already exists",
                    data.villa_no
                ));
            }
            Some("villa_numbers_special_details_lower_key") => {
                return AppError::conflict(format!(
                    "Villa number detail '{}' already exists",
                    data.special_details
                ));
            }
            Some("villa_numbers_villa_id_fkey") => {
                return AppError::validation(format!("Villa {} does not exist", data.villa_id));
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to write villa number", e)
}
