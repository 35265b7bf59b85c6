//! HTTP request layer.
//!
//! A thin axum router that maps verbs and paths onto database-layer calls,
//! validates the presence of required fields, and serializes results and
//! the typed error taxonomy ([`error::ApiError`]) to JSON. All database
//! work runs on the blocking thread pool; every handler invocation opens
//! its own repository, so no connection outlives one operation.

pub mod admin;
pub mod categories;
pub mod error;
pub mod tasks;

use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use axum::routing::{delete, get, post};
use axum::Router;
use error::ApiError;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

/// Shared server state: just the immutable database path. Handlers open
/// one connection per operation from it.
#[derive(Clone)]
pub struct AppState {
    pub db_path: PathBuf,
}

/// Builds the application router.
///
/// ```text
/// GET    /api/tasks             -> list_tasks
/// POST   /api/tasks             -> create_task
/// GET    /api/tasks/stats       -> task_stats
/// GET    /api/tasks/{id}        -> get_task
/// PUT    /api/tasks/{id}        -> update_task
/// DELETE /api/tasks/{id}        -> delete_task
/// GET    /api/categories        -> list_categories
/// POST   /api/categories        -> create_category
/// GET    /api/categories/{id}   -> get_category
/// PUT    /api/categories/{id}   -> update_category
/// DELETE /api/categories/{id}   -> delete_category
/// GET    /api/admin/dashboard   -> dashboard
/// DELETE /api/admin/tasks/all   -> delete_all_tasks
/// POST   /api/admin/reset       -> reset_database
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/api/tasks/stats", get(tasks::task_stats))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task).put(tasks::update_task).delete(tasks::delete_task),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/tasks/all", delete(admin::delete_all_tasks))
        .route("/api/admin/reset", post(admin::reset_database))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves requests until the process exits.
pub async fn run(host: &str, port: u16, db_path: PathBuf) -> Result<()> {
    let app = router(AppState { db_path });

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    msg_info!(Message::ServerListening(listener.local_addr()?.to_string()));

    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs a synchronous database operation on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("blocking task failed: {err}")))?
}
