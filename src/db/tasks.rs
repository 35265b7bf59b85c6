use crate::db::db::Db;
use crate::libs::task::{NewTask, Task, TaskPatch};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use std::path::Path;

const SELECT_TASKS: &str = "
    SELECT t.id, t.title, t.description, t.category_id, t.priority, t.status, t.due_date,
           t.created_at, t.updated_at, c.name AS category_name, c.color AS category_color
    FROM tasks t
    LEFT JOIN categories c ON t.category_id = c.id
";
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.created_at DESC, t.id DESC";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, category_id, priority, status, due_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "
    UPDATE tasks
    SET title = ?2, description = ?3, category_id = ?4, priority = ?5, status = ?6,
        due_date = ?7, updated_at = CURRENT_TIMESTAMP
    WHERE id = ?1
";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_TASKS_BY_STATUS: &str = "SELECT COUNT(*) FROM tasks WHERE status = ?1";
const CATEGORY_BREAKDOWN: &str = "
    SELECT c.name, COUNT(t.id) AS task_count
    FROM categories c
    LEFT JOIN tasks t ON t.category_id = c.id
    GROUP BY c.id
    ORDER BY c.id
";

/// Aggregate task counts: total, per status, and per category.
///
/// Categories with zero tasks are included in the breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens a task repository at the default database location.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Opens a task repository on the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// All tasks joined with their category, newest first.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_NEWEST_FIRST))?;
        let task_iter = stmt.query_map([], map_task_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// The `limit` most-recently-created tasks, joined with their category.
    pub fn recent(&mut self, limit: usize) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {} LIMIT ?1", SELECT_TASKS, ORDER_NEWEST_FIRST))?;
        let task_iter = stmt.query_map(params![limit as i64], map_task_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// One task by id, joined with its category, or `None`.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} WHERE t.id = ?1", SELECT_TASKS), params![id], map_task_row)
            .optional()
            .map_err(Into::into)
    }

    /// Inserts a task and returns its new id.
    ///
    /// Unset priority and status fall back to medium and pending.
    pub fn insert(&mut self, task: &NewTask) -> Result<i64> {
        let priority = task.priority.unwrap_or_default();
        let status = task.status.unwrap_or_default();
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.category_id, priority, status, task.due_date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Applies a partial update to the task with `id`.
    ///
    /// The stored row is read first and merged with the patch, so omitted
    /// fields keep their prior value while explicit nulls clear the
    /// nullable columns. `updated_at` is refreshed on every successful
    /// update. Returns `false` when no task with `id` exists.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<bool> {
        let existing = match self.get_by_id(id)? {
            Some(task) => task,
            None => return Ok(false),
        };

        let title = patch.title.clone().unwrap_or(existing.title);
        let description = match &patch.description {
            Some(value) => value.clone(),
            None => existing.description,
        };
        let category_id = match patch.category_id {
            Some(value) => value,
            None => existing.category_id,
        };
        let priority = patch.priority.unwrap_or(existing.priority);
        let status = patch.status.unwrap_or(existing.status);
        let due_date = match patch.due_date {
            Some(value) => value,
            None => existing.due_date,
        };

        let affected = self
            .conn
            .execute(UPDATE_TASK, params![id, title, description, category_id, priority, status, due_date])?;
        Ok(affected > 0)
    }

    /// Deletes one task; returns whether a row was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected > 0)
    }

    /// Deletes every task; returns the count removed.
    pub fn delete_all(&mut self) -> Result<usize> {
        let affected = self.conn.execute(DELETE_ALL_TASKS, [])?;
        Ok(affected)
    }

    /// Aggregate counts for the statistics endpoint and the dashboard.
    pub fn stats(&mut self) -> Result<TaskStats> {
        let total: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        let pending: i64 = self.conn.query_row(COUNT_TASKS_BY_STATUS, params!["pending"], |row| row.get(0))?;
        let in_progress: i64 = self.conn.query_row(COUNT_TASKS_BY_STATUS, params!["in-progress"], |row| row.get(0))?;
        let completed: i64 = self.conn.query_row(COUNT_TASKS_BY_STATUS, params!["completed"], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(CATEGORY_BREAKDOWN)?;
        let count_iter = stmt.query_map([], |row| {
            Ok(CategoryCount {
                name: row.get(0)?,
                count: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for count in count_iter {
            categories.push(count?);
        }

        Ok(TaskStats {
            total,
            pending,
            in_progress,
            completed,
            categories,
        })
    }
}

fn map_task_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category_id: row.get(3)?,
        priority: row.get(4)?,
        status: row.get(5)?,
        due_date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
        category_name: row.get(9)?,
        category_color: row.get(10)?,
    })
}
