//! Database reset command.
//!
//! Destructive: wipes all tasks and categories and restores the default
//! category set. Guarded by a confirmation prompt unless `--yes` is given.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDatabaseReset.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::ResetCancelled);
            return Ok(());
        }
    }

    let mut db = Db::new()?;
    db.init()?;
    db.reset()?;
    msg_success!(Message::DatabaseReset);

    Ok(())
}
