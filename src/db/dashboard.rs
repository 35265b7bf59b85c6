use crate::db::categories::{Categories, Category};
use crate::db::tasks::{TaskStats, Tasks};
use crate::libs::task::Task;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// How many recently created tasks the dashboard shows.
pub const RECENT_TASKS_LIMIT: usize = 50;

/// Read-only snapshot for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub stats: TaskStats,
    pub recent_tasks: Vec<Task>,
    pub categories: Vec<Category>,
}

/// Composes statistics, the most recent tasks and the category list into
/// one snapshot.
///
/// Purely a composition of three reads at one point in time; not
/// guaranteed atomic across them.
pub fn dashboard_data(db_path: &Path) -> Result<DashboardData> {
    let mut tasks = Tasks::open(db_path)?;
    let stats = tasks.stats()?;
    let recent_tasks = tasks.recent(RECENT_TASKS_LIMIT)?;
    let categories = Categories::open(db_path)?.list()?;

    Ok(DashboardData {
        stats,
        recent_tasks,
        categories,
    })
}
