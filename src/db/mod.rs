//! Database layer for the taskboard application.
//!
//! A thin, synchronous persistence layer built on SQLite. Each repository
//! owns exactly one connection and is constructed per operation; the
//! connection is released on drop, on every exit path. SQLite's WAL mode is
//! relied upon for concurrent access; this layer adds no locking, queuing
//! or retry logic of its own.
//!
//! ## Modules
//!
//! - [`db`]: connection lifecycle, schema creation, default-category
//!   seeding and full reset
//! - [`tasks`]: task CRUD plus aggregate statistics
//! - [`categories`]: category CRUD with reference clearing on delete
//! - [`dashboard`]: composed read-only snapshot for the admin dashboard

pub mod categories;
pub mod dashboard;
pub mod db;
pub mod tasks;
