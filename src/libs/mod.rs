//! Core library modules for the taskboard application.
//!
//! Provides the supporting infrastructure the database and server layers
//! build on: configuration, platform data storage, user-facing messages
//! and the task domain model.

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
