//! Configuration initialization command.
//!
//! Runs the interactive configuration wizard, persists the result, and
//! initializes the database so the server starts against a seeded store.

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    Db::new()?.init()?;
    msg_success!(Message::DatabaseInitialized);

    Ok(())
}
