use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

const INSERT_CATEGORY: &str = "INSERT INTO categories (name, color) VALUES (?1, ?2)";
const UPDATE_CATEGORY: &str = "UPDATE categories SET name = ?2, color = ?3 WHERE id = ?1";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const CLEAR_TASK_REFS: &str = "UPDATE tasks SET category_id = NULL WHERE category_id = ?1";
const SELECT_ALL_CATEGORIES: &str = "SELECT * FROM categories ORDER BY id";
const SELECT_CATEGORY_BY_ID: &str = "SELECT * FROM categories WHERE id = ?1";

/// A named, colored grouping for tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    pub created_at: Option<String>,
}

pub struct Categories {
    conn: Connection,
}

impl Categories {
    /// Opens a category repository at the default database location.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Opens a category repository on the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// All categories ordered by id ascending.
    pub fn list(&mut self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CATEGORIES)?;
        let category_iter = stmt.query_map([], map_category_row)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    /// One category by id, or `None`.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Category>> {
        self.conn
            .query_row(SELECT_CATEGORY_BY_ID, params![id], map_category_row)
            .optional()
            .map_err(Into::into)
    }

    /// Creates a category and returns its new id.
    ///
    /// Category names are unique; a colliding name yields `Ok(None)`
    /// without mutating state, so callers can report a conflict instead of
    /// a generic storage failure. Any other error propagates.
    pub fn create(&mut self, name: &str, color: Option<&str>) -> Result<Option<i64>> {
        let color = color.unwrap_or(DEFAULT_CATEGORY_COLOR);
        match self.conn.execute(INSERT_CATEGORY, params![name, color]) {
            Ok(_) => Ok(Some(self.conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces both `name` and `color` of the category with `id`.
    ///
    /// This is a full replace: callers wanting to keep a current value must
    /// pre-fill it from the stored row. Returns whether a row changed.
    pub fn update(&mut self, id: i64, name: &str, color: &str) -> Result<bool> {
        let affected = self.conn.execute(UPDATE_CATEGORY, params![id, name, color])?;
        Ok(affected > 0)
    }

    /// Deletes a category, clearing `category_id` on every task that
    /// referenced it.
    ///
    /// Both statements run in one transaction so a crash in between never
    /// commits an inconsistent state. Returns whether the category row was
    /// removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(CLEAR_TASK_REFS, params![id])?;
        let deleted = tx.execute(DELETE_CATEGORY, params![id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }
}

fn map_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        created_at: row.get(3)?,
    })
}
