//! Task endpoints.
//!
//! The request layer owns required-field validation: a task must arrive
//! with a non-blank title, and a `category_id` must reference an existing
//! category before the mutation runs. Everything else is delegated to the
//! database layer with its defaults.

use super::error::{ApiError, ApiResult};
use super::{run_blocking, AppState};
use crate::db::categories::Categories;
use crate::db::tasks::Tasks;
use crate::libs::task::{NewTask, Priority, Status, TaskPatch};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// GET /api/tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let tasks = run_blocking(move || Ok(Tasks::open(&state.db_path)?.fetch_all()?)).await?;

    Ok(Json(json!({ "success": true, "tasks": tasks })))
}

/// GET /api/tasks/stats
pub async fn task_stats(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let stats = run_blocking(move || Ok(Tasks::open(&state.db_path)?.stats()?)).await?;

    Ok(Json(json!({ "success": true, "stats": stats })))
}

/// GET /api/tasks/{id}
pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<impl IntoResponse> {
    let task = run_blocking(move || Tasks::open(&state.db_path)?.get_by_id(id)?.ok_or(ApiError::NotFound("task"))).await?;

    Ok(Json(json!({ "success": true, "task": task })))
}

/// POST /api/tasks
pub async fn create_task(State(state): State<AppState>, Json(req): Json<CreateTaskRequest>) -> ApiResult<impl IntoResponse> {
    let title = match req.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(ApiError::Validation("title is required".to_string())),
    };

    let task = run_blocking(move || {
        if let Some(category_id) = req.category_id {
            ensure_category_exists(&state.db_path, category_id)?;
        }

        let new_task = NewTask {
            title,
            description: req.description,
            category_id: req.category_id,
            priority: req.priority,
            status: req.status,
            due_date: req.due_date,
        };

        let mut tasks = Tasks::open(&state.db_path)?;
        let id = tasks.insert(&new_task)?;
        tasks.get_by_id(id)?.ok_or(ApiError::NotFound("task"))
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Task created successfully", "task": task })),
    ))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<impl IntoResponse> {
    let task = run_blocking(move || {
        if let Some(Some(category_id)) = patch.category_id {
            ensure_category_exists(&state.db_path, category_id)?;
        }

        let mut tasks = Tasks::open(&state.db_path)?;
        if !tasks.update(id, &patch)? {
            return Err(ApiError::NotFound("task"));
        }
        tasks.get_by_id(id)?.ok_or(ApiError::NotFound("task"))
    })
    .await?;

    Ok(Json(json!({ "success": true, "message": "Task updated successfully", "task": task })))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<impl IntoResponse> {
    run_blocking(move || {
        if !Tasks::open(&state.db_path)?.delete(id)? {
            return Err(ApiError::NotFound("task"));
        }
        Ok(())
    })
    .await?;

    Ok(Json(json!({ "success": true, "message": "Task deleted successfully" })))
}

fn ensure_category_exists(db_path: &std::path::Path, category_id: i64) -> Result<(), ApiError> {
    if Categories::open(db_path)?.get_by_id(category_id)?.is_none() {
        return Err(ApiError::Validation(format!("category {} does not exist", category_id)));
    }
    Ok(())
}
