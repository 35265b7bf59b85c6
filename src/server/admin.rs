//! Admin endpoints: the dashboard snapshot and the destructive bulk
//! operations the admin panel exposes.

use super::error::ApiResult;
use super::{run_blocking, AppState};
use crate::db::dashboard::dashboard_data;
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET /api/admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let dashboard = run_blocking(move || Ok(dashboard_data(&state.db_path)?)).await?;

    Ok(Json(json!({ "success": true, "dashboard": dashboard })))
}

/// DELETE /api/admin/tasks/all
pub async fn delete_all_tasks(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let count = run_blocking(move || Ok(Tasks::open(&state.db_path)?.delete_all()?)).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Deleted {} tasks", count),
        "count": count,
    })))
}

/// POST /api/admin/reset
pub async fn reset_database(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    run_blocking(move || {
        let mut db = Db::open(&state.db_path)?;
        db.reset()?;
        Ok(())
    })
    .await?;

    Ok(Json(json!({ "success": true, "message": "Database reset successfully" })))
}
