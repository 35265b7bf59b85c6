//! # Taskboard
//!
//! A single-user task management web service. Tasks carry a title,
//! description, category, priority, status and due date; categories are
//! named, colored groupings. The HTTP API exposes CRUD for both entities
//! plus aggregate statistics and a recent-activity dashboard.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, and delete tasks with partial
//!   updates that preserve unspecified fields
//! - **Categories**: Named, colored groupings with safe deletion that
//!   clears task references
//! - **Statistics**: Task counts by status and per-category breakdowns
//! - **Dashboard**: Composed snapshot of stats, recent tasks and categories
//! - **JSON API**: Axum-based HTTP surface with a typed error taxonomy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
