//! HTTP server command.
//!
//! Resolves the listener settings (flags override the config file, the
//! config file overrides defaults), initializes the database once, and
//! serves until the process is stopped.

use crate::db::db::{Db, DB_FILE_NAME};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use crate::server;
use anyhow::Result;
use clap::Args;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overriding the configured value
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overriding the configured value
    #[arg(long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    init_tracing();

    let config = Config::read()?;
    let server_config = config.server.unwrap_or_default();
    let host = args.host.unwrap_or(server_config.host);
    let port = args.port.unwrap_or(server_config.port);

    let db_path = DataStorage::new().get_path(DB_FILE_NAME)?;
    Db::open(&db_path)?.init()?;
    msg_debug!(format!("database at {}", db_path.display()));

    server::run(&host, port, db_path).await
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "taskboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
