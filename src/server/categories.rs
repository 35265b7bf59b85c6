//! Category endpoints.
//!
//! Category updates are a full replace at the database layer; this layer
//! pre-fills any omitted field from the stored row first. A duplicate name
//! on create surfaces as a conflict, never as a generic server error.

use super::error::{ApiError, ApiResult};
use super::{run_blocking, AppState};
use crate::db::categories::Categories;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = run_blocking(move || Ok(Categories::open(&state.db_path)?.list()?)).await?;

    Ok(Json(json!({ "success": true, "categories": categories })))
}

/// GET /api/categories/{id}
pub async fn get_category(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<impl IntoResponse> {
    let category =
        run_blocking(move || Categories::open(&state.db_path)?.get_by_id(id)?.ok_or(ApiError::NotFound("category"))).await?;

    Ok(Json(json!({ "success": true, "category": category })))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = match req.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(ApiError::Validation("name is required".to_string())),
    };

    let category = run_blocking(move || {
        let mut categories = Categories::open(&state.db_path)?;
        let id = categories
            .create(&name, req.color.as_deref())?
            .ok_or_else(|| ApiError::Conflict(format!("category '{}' already exists", name)))?;
        categories.get_by_id(id)?.ok_or(ApiError::NotFound("category"))
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Category created successfully", "category": category })),
    ))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let category = run_blocking(move || {
        let mut categories = Categories::open(&state.db_path)?;
        let current = categories.get_by_id(id)?.ok_or(ApiError::NotFound("category"))?;

        let name = req.name.unwrap_or(current.name);
        let color = req.color.unwrap_or(current.color);
        if !categories.update(id, &name, &color)? {
            return Err(ApiError::NotFound("category"));
        }
        categories.get_by_id(id)?.ok_or(ApiError::NotFound("category"))
    })
    .await?;

    Ok(Json(json!({ "success": true, "message": "Category updated successfully", "category": category })))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<impl IntoResponse> {
    run_blocking(move || {
        if !Categories::open(&state.db_path)?.delete(id)? {
            return Err(ApiError::NotFound("category"));
        }
        Ok(())
    })
    .await?;

    Ok(Json(json!({ "success": true, "message": "Category deleted successfully" })))
}
