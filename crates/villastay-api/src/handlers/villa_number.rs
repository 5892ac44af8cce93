//! Villa number CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use villastay_core::error::AppError;
use villastay_core::traits::repository::Repository;
use villastay_core::types::filter::FilterField;
use villastay_core::types::patch::PatchDocument;
use villastay_entity::villa_number::NewVillaNumber;

use crate::dto::request::{VillaNumberCreateDto, VillaNumberUpdateDto};
use crate::dto::response::VillaNumberDto;
use crate::envelope::ApiResponse;
use crate::error::{ApiError, map_validation_errors};
use crate::state::AppState;

/// Optional list filters.
#[derive(Debug, Deserialize)]
pub struct ListVillaNumbersQuery {
    /// Restrict to units of one villa.
    pub villa_id: Option<i32>,
}

/// GET /api/villa-numbers
pub async fn list_villa_numbers(
    State(state): State<AppState>,
    Query(params): Query<ListVillaNumbersQuery>,
) -> Result<ApiResponse<Vec<VillaNumberDto>>, ApiError> {
    let filters: Vec<FilterField> = params
        .villa_id
        .map(|villa_id| FilterField::eq_int("villa_id", i64::from(villa_id)))
        .into_iter()
        .collect();

    let numbers = state.villa_number_repo.find_all(&filters).await?;

    Ok(ApiResponse::ok(
        numbers.into_iter().map(VillaNumberDto::from).collect(),
    ))
}

/// GET /api/villa-numbers/{id}
pub async fn get_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<VillaNumberDto>, ApiError> {
    if id <= 0 {
        return Err(AppError::validation("Villa number must be positive").into());
    }

    let number = state
        .villa_number_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Villa number {id} not found")))?;

    Ok(ApiResponse::ok(VillaNumberDto::from(number)))
}

/// POST /api/villa-numbers
pub async fn create_villa_number(
    State(state): State<AppState>,
    Json(body): Json<VillaNumberCreateDto>,
) -> Result<ApiResponse<VillaNumberDto>, ApiError> {
    body.validate()
        .map_err(|e| map_validation_errors(&e))?;

    // The foreign key still rejects a villa deleted after this check.
    if state.villa_repo.find_by_id(&body.villa_id).await?.is_none() {
        return Err(AppError::validation(format!("Villa {} does not exist", body.villa_id)).into());
    }

    let number = state
        .villa_number_repo
        .create(&NewVillaNumber::from(body))
        .await?;
    let location = format!("/api/villa-numbers/{}", number.villa_no);

    tracing::info!(
        villa_no = number.villa_no,
        villa_id = number.villa_id,
        "Villa number created"
    );
    Ok(ApiResponse::created(VillaNumberDto::from(number), location))
}

/// PUT /api/villa-numbers/{id}
pub async fn update_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<VillaNumberUpdateDto>,
) -> Result<ApiResponse<()>, ApiError> {
    if id != body.villa_no {
        return Err(AppError::validation("Path id does not match body villa_no").into());
    }
    body.validate()
        .map_err(|e| map_validation_errors(&e))?;

    state
        .villa_number_repo
        .update(&NewVillaNumber::from(body))
        .await?;

    Ok(ApiResponse::no_content())
}

/// PATCH /api/villa-numbers/{id}
pub async fn patch_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PatchDocument>,
) -> Result<ApiResponse<()>, ApiError> {
    if id <= 0 || patch.is_empty() {
        return Err(AppError::validation("A patch document and a positive id are required").into());
    }

    // Existence is verified before any operation is applied.
    let number = state
        .villa_number_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Villa number {id} not found")))?;

    let snapshot = serde_json::to_value(VillaNumberUpdateDto::from(&number))?;
    let patched = patch.apply(&snapshot)?;

    let dto: VillaNumberUpdateDto = serde_json::from_value(patched)
        .map_err(|e| AppError::validation(format!("Patched villa number is invalid: {e}")))?;
    dto.validate().map_err(|e| map_validation_errors(&e))?;
    if dto.villa_no != id {
        return Err(AppError::validation("Villa number is immutable").into());
    }

    state
        .villa_number_repo
        .update(&NewVillaNumber::from(dto))
        .await?;

    Ok(ApiResponse::no_content())
}

/// DELETE /api/villa-numbers/{id}
pub async fn delete_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>, ApiError> {
    if id <= 0 {
        return Err(AppError::validation("Villa number must be positive").into());
    }

    let deleted = state.villa_number_repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Villa number {id} not found")).into());
    }

    tracing::info!(villa_no = id, "Villa number deleted");
    Ok(ApiResponse::no_content())
}
