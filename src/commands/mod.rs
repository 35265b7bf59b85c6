pub mod init;
pub mod reset;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Reset the database to its default state")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        dotenv::dotenv().ok();

        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init => init::cmd(),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
