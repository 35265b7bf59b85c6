//! Core database connection, schema and lifecycle management.
//!
//! [`Db`] opens one SQLite connection with WAL journaling and foreign keys
//! enabled. [`Db::init`] is idempotent and runs once at process bootstrap:
//! it creates both tables if absent and seeds the default categories,
//! silently skipping any whose name already exists. [`Db::reset`] wipes
//! everything, restarts the id counters and re-seeds the defaults in a
//! single transaction.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskboard.db";

/// Default categories seeded on first initialization and on every reset.
pub const DEFAULT_CATEGORIES: [(&str, &str); 5] = [
    ("Personal", "#3498db"),
    ("Work", "#e74c3c"),
    ("School", "#2ecc71"),
    ("Shopping", "#f39c12"),
    ("Other", "#95a5a6"),
];

const SCHEMA_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    color TEXT DEFAULT '#3498db',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    category_id INTEGER,
    priority TEXT CHECK(priority IN ('low', 'medium', 'high')) DEFAULT 'medium',
    status TEXT CHECK(status IN ('pending', 'in-progress', 'completed')) DEFAULT 'pending',
    due_date DATE,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE SET NULL
)";
const SEED_CATEGORY: &str = "INSERT OR IGNORE INTO categories (name, color) VALUES (?1, ?2)";
const INSERT_CATEGORY_SEED: &str = "INSERT INTO categories (name, color) VALUES (?1, ?2)";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its default platform data-directory location.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens a connection at `path` with WAL journaling and foreign key
    /// enforcement. Performs no schema work.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;")?;

        Ok(Db { conn })
    }

    /// Creates both tables if absent and seeds the default categories.
    ///
    /// Idempotent: seeding uses `INSERT OR IGNORE` keyed on the unique
    /// category name, so a duplicate never raises past this call and
    /// calling twice leaves exactly one row per default.
    pub fn init(&self) -> Result<()> {
        self.conn.execute(SCHEMA_CATEGORIES, [])?;
        self.conn.execute(SCHEMA_TASKS, [])?;

        let mut stmt = self.conn.prepare(SEED_CATEGORY)?;
        for (name, color) in DEFAULT_CATEGORIES {
            stmt.execute(params![name, color])?;
        }

        Ok(())
    }

    /// Deletes all tasks and categories, restarts both id counters and
    /// re-seeds the defaults, in one transaction.
    pub fn reset(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM tasks", [])?;
        tx.execute("DELETE FROM categories", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name IN ('tasks', 'categories')", [])?;

        {
            // The tables were just emptied, so plain inserts suffice here.
            let mut stmt = tx.prepare(INSERT_CATEGORY_SEED)?;
            for (name, color) in DEFAULT_CATEGORIES {
                stmt.execute(params![name, color])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
