//! Villa CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use villastay_core::error::AppError;
use villastay_core::traits::repository::Repository;
use villastay_core::types::filter::{FilterField, FilterOp, FilterValue};
use villastay_core::types::patch::PatchDocument;
use villastay_entity::villa::NewVilla;

use crate::dto::request::{VillaCreateDto, VillaUpdateDto};
use crate::dto::response::VillaDto;
use crate::envelope::ApiResponse;
use crate::error::{ApiError, map_validation_errors};
use crate::state::AppState;

/// Optional list filters.
#[derive(Debug, Deserialize)]
pub struct ListVillasQuery {
    /// Substring match on the villa name.
    pub name: Option<String>,
    /// Minimum occupancy.
    pub min_occupancy: Option<i64>,
}

/// GET /api/villas
pub async fn list_villas(
    State(state): State<AppState>,
    Query(params): Query<ListVillasQuery>,
) -> Result<ApiResponse<Vec<VillaDto>>, ApiError> {
    let mut filters = Vec::new();
    if let Some(name) = &params.name {
        filters.push(FilterField::ilike("name", format!("%{name}%")));
    }
    if let Some(min) = params.min_occupancy {
        filters.push(FilterField::new(
            "occupancy",
            FilterOp::Gte,
            FilterValue::Integer(min),
        ));
    }

    let villas = state.villa_repo.find_all(&filters).await?;
    Ok(ApiResponse::ok(
        villas.into_iter().map(VillaDto::from).collect(),
    ))
}

/// GET /api/villas/{id}
pub async fn get_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<VillaDto>, ApiError> {
    if id <= 0 {
        return Err(AppError::validation("Villa id must be positive").into());
    }

    let villa = state
        .villa_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Villa {id} not found")))?;

    Ok(ApiResponse::ok(VillaDto::from(villa)))
}

/// POST /api/villas
pub async fn create_villa(
    State(state): State<AppState>,
    Json(body): Json<VillaCreateDto>,
) -> Result<ApiResponse<VillaDto>, ApiError> {
    body.validate()
        .map_err(|e| map_validation_errors(&e))?;

    let villa = state.villa_repo.create(&NewVilla::from(body)).await?;
    let location = format!("/api/villas/{}", villa.id);

    tracing::info!(villa_id = villa.id, name = %villa.name, "Villa created");
    Ok(ApiResponse::created(VillaDto::from(villa), location))
}

/// PUT /api/villas/{id}
pub async fn update_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<VillaUpdateDto>,
) -> Result<ApiResponse<()>, ApiError> {
    if id != body.id {
        return Err(AppError::validation("Path id does not match body id").into());
    }
    body.validate()
        .map_err(|e| map_validation_errors(&e))?;

    state
        .villa_repo
        .update(id, &NewVilla::from(body))
        .await?;

    Ok(ApiResponse::no_content())
}

/// PATCH /api/villas/{id}
pub async fn patch_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PatchDocument>,
) -> Result<ApiResponse<()>, ApiError> {
    if id <= 0 || patch.is_empty() {
        return Err(AppError::validation("A patch document and a positive id are required").into());
    }

    // Existence is verified before any operation is applied.
    let villa = state
        .villa_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Villa {id} not found")))?;

    let snapshot = serde_json::to_value(VillaUpdateDto::from(&villa))?;
    let patched = patch.apply(&snapshot)?;

    let dto: VillaUpdateDto = serde_json::from_value(patched)
        .map_err(|e| AppError::validation(format!("Patched villa is invalid: {e}")))?;
    dto.validate().map_err(|e| map_validation_errors(&e))?;
    if dto.id != id {
        return Err(AppError::validation("Villa id is immutable").into());
    }

    state.villa_repo.update(id, &NewVilla::from(dto)).await?;

    Ok(ApiResponse::no_content())
}

/// DELETE /api/villas/{id}
pub async fn delete_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>, ApiError> {
    if id <= 0 {
        return Err(AppError::validation("Villa id must be positive").into());
    }

    let deleted = state.villa_repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Villa {id} not found")).into());
    }

    tracing::info!(villa_id = id, "Villa deleted");
    Ok(ApiResponse::no_content())
}
